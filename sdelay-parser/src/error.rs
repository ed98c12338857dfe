//! Listing parser errors

use sdelay_spec::DelayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown instruction at line {line}: {mnemonic}")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("Invalid register at line {line}: {name}")]
    InvalidRegister { line: usize, name: String },

    #[error("Invalid byte value at line {line}: {value}")]
    InvalidImmediate { line: usize, value: u64 },

    #[error("Unsupported jump condition at line {line}: {condition}")]
    UnsupportedCondition { line: usize, condition: String },

    #[error("Malformed delay loop at line {line}: {message}")]
    MalformedLoop { line: usize, message: String },

    #[error("Invalid loop configuration: {0}")]
    InvalidConfiguration(#[from] DelayError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
