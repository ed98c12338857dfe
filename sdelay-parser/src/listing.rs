//! Read an emitted listing back into a loop configuration

use crate::error::{ParseError, Result};
use crate::parser::parse_line;
use sdelay_spec::{Instruction, Line, LoopConfiguration, Register, INCREMENT};

/// A delay loop recovered from listing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredLoop {
    /// Label the loop body branches back to
    pub label: String,
    /// LOAD values in register order
    pub initial_values: Vec<u8>,
    pub configuration: LoopConfiguration,
}

/// Parse every line of a listing, keeping 1-based line numbers
pub fn parse_listing(source: &str) -> Result<Vec<(usize, Line)>> {
    let mut lines = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(line) = parse_line(text, index + 1)? {
            lines.push((index + 1, line));
        }
    }
    Ok(lines)
}

/// Rebuild the loop configuration from a listing
///
/// The listing must have the emitted shape: LOADs for S0, S1, ... in order,
/// one label, then one `ADD sX, 0x01` / `JUMP NZ, label` pair per loaded
/// register in the same order. Comments may appear anywhere.
pub fn recover_configuration(source: &str) -> Result<RecoveredLoop> {
    let lines = parse_listing(source)?;
    let mut body = lines
        .iter()
        .filter(|(_, line)| !matches!(line, Line::Comment(_)))
        .peekable();

    let mut initial_values = Vec::new();
    while let Some((line_no, Line::Instruction(Instruction::Load { reg, value }))) = body.peek() {
        expect_register(*reg, initial_values.len(), *line_no)?;
        initial_values.push(*value);
        body.next();
    }
    if initial_values.is_empty() {
        return Err(malformed(first_line(&lines), "expected at least one LOAD"));
    }

    let label = match body.next() {
        Some((_, Line::Label(name))) => name.clone(),
        Some((line_no, _)) => return Err(malformed(*line_no, "expected the loop label")),
        None => return Err(malformed(last_line(&lines), "missing loop label")),
    };

    for index in 0..initial_values.len() {
        match body.next() {
            Some((line_no, Line::Instruction(Instruction::Add { reg, imm }))) => {
                expect_register(*reg, index, *line_no)?;
                if *imm != INCREMENT {
                    return Err(malformed(*line_no, "loop counters must add 0x01"));
                }
            }
            Some((line_no, _)) => return Err(malformed(*line_no, "expected ADD")),
            None => return Err(malformed(last_line(&lines), "loop body ends early")),
        }

        match body.next() {
            Some((_, Line::Instruction(Instruction::JumpNz { label: target }))) if *target == label => {}
            Some((line_no, Line::Instruction(Instruction::JumpNz { .. }))) => {
                return Err(malformed(*line_no, "jump does not target the loop label"))
            }
            Some((line_no, _)) => return Err(malformed(*line_no, "expected JUMP NZ")),
            None => return Err(malformed(last_line(&lines), "loop body ends early")),
        }
    }

    if let Some((line_no, _)) = body.next() {
        return Err(malformed(*line_no, "unexpected line after the loop body"));
    }

    let configuration = LoopConfiguration::from_initial_values(&initial_values)?;
    Ok(RecoveredLoop {
        label,
        initial_values,
        configuration,
    })
}

fn expect_register(reg: Register, index: usize, line: usize) -> Result<()> {
    if reg.index() != index {
        return Err(malformed(
            line,
            &format!("expected register S{:x}, found {}", index, reg),
        ));
    }
    Ok(())
}

fn malformed(line: usize, message: &str) -> ParseError {
    ParseError::MalformedLoop {
        line,
        message: message.to_string(),
    }
}

fn first_line(lines: &[(usize, Line)]) -> usize {
    lines.iter().find(|(_, l)| l.is_instruction()).or(lines.first()).map_or(0, |(n, _)| *n)
}

fn last_line(lines: &[(usize, Line)]) -> usize {
    lines.last().map_or(0, |(n, _)| *n)
}
