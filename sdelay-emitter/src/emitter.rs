//! Listing emitter
//!
//! Output layout:
//!
//! ```text
//! ; header comment block (HEADER_LINES lines)
//! LOAD S0, 0x00          one per register, innermost first
//! LOAD S1, 0xec
//! loop:
//!     ADD S0, 0x01       one pair per register, innermost first
//!     JUMP NZ, loop
//!     ADD S1, 0x01
//!     JUMP NZ, loop
//! ```

use crate::error::{EmitterError, Result};
use crate::formatter::format_line;
use sdelay_spec::{
    DelayRequest, Instruction, Line, LoopConfiguration, LoopCost, DEFAULT_LABEL, INCREMENT,
};

/// Number of comment lines before the first LOAD
pub const HEADER_LINES: usize = 6;

/// Mnemonics and condition codes a label must not collide with
const RESERVED: &[&str] = &["load", "add", "jump", "z", "nz", "c", "nc"];

/// Listing options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    label: String,
    indent: String,
}

impl EmitOptions {
    /// Use `label` as the loop label
    pub fn with_label(mut self, label: &str) -> Result<Self> {
        if !is_valid_label(label) {
            return Err(EmitterError::InvalidLabel(label.to_string()));
        }
        self.label = label.to_string();
        Ok(self)
    }

    /// Prefix loop-body instructions with `indent`
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            indent: "    ".to_string(),
        }
    }
}

/// Identifier that cannot be mistaken for a register, mnemonic or condition
pub fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !starts_ok || !rest_ok {
        return false;
    }

    let lower = label.to_ascii_lowercase();
    let is_register = lower.len() == 2
        && lower.starts_with('s')
        && lower.as_bytes()[1].is_ascii_hexdigit();

    !is_register && !RESERVED.contains(&lower.as_str())
}

/// Build the listing as structured lines
pub fn emit_lines(
    request: &DelayRequest,
    config: &LoopConfiguration,
    cost: &LoopCost,
    options: &EmitOptions,
) -> Vec<Line> {
    let mut lines = header(request, config, cost);

    for (reg, value) in config.registers().zip(config.initial_values()) {
        lines.push(Line::Instruction(Instruction::Load { reg, value }));
    }

    lines.push(Line::Label(options.label.clone()));

    for reg in config.registers() {
        lines.push(Line::Instruction(Instruction::Add { reg, imm: INCREMENT }));
        lines.push(Line::Instruction(Instruction::JumpNz {
            label: options.label.clone(),
        }));
    }

    lines
}

/// Render the listing as text lines with the given options
pub fn emit_with(
    request: &DelayRequest,
    config: &LoopConfiguration,
    cost: &LoopCost,
    options: &EmitOptions,
) -> Vec<String> {
    emit_lines(request, config, cost, options)
        .iter()
        .map(|line| format_line(line, &options.indent))
        .collect()
}

/// Render the listing as text lines with default options
pub fn emit(request: &DelayRequest, config: &LoopConfiguration, cost: &LoopCost) -> Vec<String> {
    emit_with(request, config, cost, &EmitOptions::default())
}

/// Join listing lines into newline-terminated text
pub fn render(lines: &[String]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

fn header(request: &DelayRequest, config: &LoopConfiguration, cost: &LoopCost) -> Vec<Line> {
    vec![
        Line::Comment("Software delay loop".to_string()),
        Line::Comment(format!("Requested delay: {} s", request.target_seconds())),
        Line::Comment(format!(
            "Clock: {} MHz, {} cycles per instruction",
            request.clock_mhz(),
            request.cycles_per_instruction()
        )),
        Line::Comment(format!(
            "Registers: {}, outer repeats: {}",
            config.register_count(),
            config.outer_repeats()
        )),
        Line::Comment(format!(
            "Exact cost: {} instructions, {} cycles",
            cost.instruction_count, cost.cycle_count
        )),
        Line::Comment(format!("Exact delay: {} s", cost.elapsed_seconds)),
    ]
}
