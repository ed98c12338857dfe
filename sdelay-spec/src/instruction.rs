//! Delay-loop instruction subset
//!
//! Only the instructions a nested-counter delay loop needs are modelled:
//! - `LOAD sX, kk`     register <- constant
//! - `ADD sX, kk`      register <- register + constant, sets Z on wraparound to 0
//! - `JUMP NZ, label`  branch if the zero flag is clear

use crate::register::Register;
use serde::{Deserialize, Serialize};

/// Default label the loop body branches back to
pub const DEFAULT_LABEL: &str = "loop";

/// Increment applied by every counting `ADD`
pub const INCREMENT: u8 = 0x01;

/// Delay-loop instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// LOAD: reg = value
    Load { reg: Register, value: u8 },

    /// ADD: reg = reg + imm (mod 256)
    Add { reg: Register, imm: u8 },

    /// JUMP NZ: branch to label when the last result was nonzero
    JumpNz { label: String },
}

impl Instruction {
    /// The register this instruction writes, if any
    pub fn register(&self) -> Option<Register> {
        match self {
            Instruction::Load { reg, .. } | Instruction::Add { reg, .. } => Some(*reg),
            Instruction::JumpNz { .. } => None,
        }
    }
}

/// One line of an assembly listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// `; text`
    Comment(String),
    /// `name:`
    Label(String),
    Instruction(Instruction),
}

impl Line {
    pub fn is_instruction(&self) -> bool {
        matches!(self, Line::Instruction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_register() {
        let load = Instruction::Load { reg: Register::S3, value: 0x10 };
        assert_eq!(load.register(), Some(Register::S3));

        let add = Instruction::Add { reg: Register::S0, imm: INCREMENT };
        assert_eq!(add.register(), Some(Register::S0));

        let jump = Instruction::JumpNz { label: DEFAULT_LABEL.to_string() };
        assert_eq!(jump.register(), None);
    }

    #[test]
    fn test_line_kinds() {
        assert!(Line::Instruction(Instruction::JumpNz { label: "x".into() }).is_instruction());
        assert!(!Line::Label("x".into()).is_instruction());
        assert!(!Line::Comment("x".into()).is_instruction());
    }
}
