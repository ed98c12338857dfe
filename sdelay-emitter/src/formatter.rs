//! Instruction formatting to assembly text

use sdelay_spec::{Instruction, Line, Register};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Load { reg, value } => {
            format!("LOAD {}, {}", format_reg(*reg), format_byte(*value))
        }
        Instruction::Add { reg, imm } => {
            format!("ADD {}, {}", format_reg(*reg), format_byte(*imm))
        }
        Instruction::JumpNz { label } => format!("JUMP NZ, {}", label),
    }
}

/// Format a listing line; `indent` prefixes loop-body instructions
pub fn format_line(line: &Line, indent: &str) -> String {
    match line {
        Line::Comment(text) if text.is_empty() => ";".to_string(),
        Line::Comment(text) => format!("; {}", text),
        Line::Label(name) => format!("{}:", name),
        Line::Instruction(instr @ Instruction::Load { .. }) => format(instr),
        Line::Instruction(instr) => format!("{}{}", indent, format(instr)),
    }
}

/// Byte constant: `0x` followed by two lowercase hex digits
pub fn format_byte(value: u8) -> String {
    format!("{:#04x}", value)
}

fn format_reg(reg: Register) -> String {
    reg.name().to_string()
}
