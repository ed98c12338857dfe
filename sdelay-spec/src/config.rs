//! # Solver Configuration
//!
//! Tunables for register sizing. The capacity estimate is a heuristic seed:
//! it divides the dummy instruction count by `sizing_divisor^(registers-1)`
//! and ignores the outermost register's own increment/branch overhead (at
//! most [`IGNORED_OUTER_OVERHEAD`] instructions). The exact cost model then
//! decides the final configuration.

use crate::REGISTER_BITS;
use std::fmt;

/// Longest register chain whose exact cycle count fits in a `u128`
///
/// Eleven registers top out near 2^89 instructions; at `u32::MAX` cycles per
/// instruction that is under 2^121 cycles. Twelve would need 2^129.
pub const MAX_CHAIN_REGISTERS: u8 = 11;

/// Outer-loop overhead the capacity estimate leaves out (256 repeats × ADD/JUMP)
pub const IGNORED_OUTER_OVERHEAD: u64 = 512;

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Register ceiling; sizing past it is an unrepresentable delay (1-11)
    pub max_registers: u8,
    /// Per-level divisor applied by the capacity estimate (finite, >= 1)
    pub sizing_divisor: f64,
}

impl SolverConfig {
    /// Default configuration
    /// - Max registers: 8 (a 64-bit counter chain)
    /// - Sizing divisor: 2.0 (one ADD/JUMP pair per register level)
    pub const DEFAULT: Self = Self {
        max_registers: 8,
        sizing_divisor: 2.0,
    };

    /// Create a new configuration with validation
    pub fn new(max_registers: u8, sizing_divisor: f64) -> Result<Self, ConfigError> {
        let config = Self {
            max_registers,
            sizing_divisor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a different register ceiling
    pub fn with_max_registers(self, max_registers: u8) -> Result<Self, ConfigError> {
        Self::new(max_registers, self.sizing_divisor)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_registers < 1 || self.max_registers > MAX_CHAIN_REGISTERS {
            return Err(ConfigError::InvalidMaxRegisters);
        }

        // NaN fails this comparison too
        if !(self.sizing_divisor >= 1.0) || !self.sizing_divisor.is_finite() {
            return Err(ConfigError::InvalidSizingDivisor);
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SolverConfig {{ max_registers: {} ({} bits), sizing_divisor: {}, ignored overhead: {} instructions }}",
            self.max_registers,
            self.max_registers as u32 * REGISTER_BITS,
            self.sizing_divisor,
            IGNORED_OUTER_OVERHEAD,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Max registers must be in range [1, MAX_CHAIN_REGISTERS]
    InvalidMaxRegisters,
    /// Sizing divisor must be finite and at least 1
    InvalidSizingDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxRegisters => {
                write!(f, "max_registers must be in range [1, {}]", MAX_CHAIN_REGISTERS)
            }
            ConfigError::InvalidSizingDivisor => {
                write!(f, "sizing_divisor must be finite and >= 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
