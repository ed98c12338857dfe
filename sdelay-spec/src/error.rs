//! # Error Types for delay-loop generation

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelayError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Request (domain) errors
    #[error("Invalid clock speed: {0} MHz (must be positive and finite)")]
    InvalidClockSpeed(f64),

    #[error("Invalid cycles per instruction: {0} (must be positive)")]
    InvalidCyclesPerInstruction(u32),

    #[error("Invalid target delay: {0} s (must be positive and finite)")]
    InvalidTargetDelay(f64),

    // Sizing errors
    #[error("Outer loop needs more than 256 repeats with {register_count} register(s)")]
    RepeatLimitExceeded { register_count: u8 },

    #[error("Delay of {target_seconds} s cannot be represented with at most {max_registers} registers")]
    Unrepresentable { target_seconds: f64, max_registers: u8 },

    #[error("Invalid register count: {0}")]
    InvalidRegisterCount(u8),

    #[error("Invalid outer repeat count: {0} (valid range: 1-256)")]
    InvalidOuterRepeats(u16),

    #[error("Inner register {index} must start at 0x00, found {value:#04x}")]
    NonZeroInnerRegister { index: usize, value: u8 },
}

impl DelayError {
    /// Check if this error rejects the request itself, before any sizing
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            DelayError::InvalidClockSpeed(_)
                | DelayError::InvalidCyclesPerInstruction(_)
                | DelayError::InvalidTargetDelay(_)
        )
    }

    /// Check if the solver can recover by adding a register
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DelayError::RepeatLimitExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, DelayError>;
