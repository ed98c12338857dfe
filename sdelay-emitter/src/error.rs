//! Emitter errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("Invalid label: {0:?} (expected an identifier that is not a register or condition)")]
    InvalidLabel(String),
}

pub type Result<T> = std::result::Result<T, EmitterError>;
