//! Sized nested-counter loop and its exact cost
//!
//! Registers are chained innermost first: index 0 is incremented on every
//! pass, index `register_count - 1` is the outermost counter. Inner registers
//! start at 0 so each runs a full 256 increments per overflow; the outermost
//! starts at `256 - outer_repeats` so it overflows after `outer_repeats`
//! increments.

use crate::config::MAX_CHAIN_REGISTERS;
use crate::error::{DelayError, Result};
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values an 8-bit counter passes through before wrapping
pub const COUNTER_RANGE: u16 = 256;

/// Largest outer repeat count; its initial value wraps to 0x00
pub const MAX_OUTER_REPEATS: u16 = COUNTER_RANGE;

/// Register count and outer repeat count of a delay loop
///
/// Deserialization goes through [`LoopConfiguration::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLoopConfiguration")]
pub struct LoopConfiguration {
    register_count: u8,
    outer_repeats: u16,
}

/// Unchecked wire form of [`LoopConfiguration`]
#[derive(Deserialize)]
struct RawLoopConfiguration {
    register_count: u8,
    outer_repeats: u16,
}

impl TryFrom<RawLoopConfiguration> for LoopConfiguration {
    type Error = DelayError;

    fn try_from(raw: RawLoopConfiguration) -> Result<Self> {
        Self::new(raw.register_count, raw.outer_repeats)
    }
}

impl LoopConfiguration {
    /// Create a configuration, checking both counts are representable
    pub fn new(register_count: u8, outer_repeats: u16) -> Result<Self> {
        if register_count < 1 || register_count > MAX_CHAIN_REGISTERS {
            return Err(DelayError::InvalidRegisterCount(register_count));
        }
        if outer_repeats < 1 || outer_repeats > MAX_OUTER_REPEATS {
            return Err(DelayError::InvalidOuterRepeats(outer_repeats));
        }

        Ok(Self {
            register_count,
            outer_repeats,
        })
    }

    /// Rebuild a configuration from per-register initial values
    pub fn from_initial_values(values: &[u8]) -> Result<Self> {
        let (&outer, inner) = values
            .split_last()
            .ok_or(DelayError::InvalidRegisterCount(0))?;

        if let Some((index, &value)) = inner.iter().enumerate().find(|&(_, &v)| v != 0) {
            return Err(DelayError::NonZeroInnerRegister { index, value });
        }

        let register_count = u8::try_from(values.len())
            .map_err(|_| DelayError::InvalidRegisterCount(u8::MAX))?;

        Self::new(register_count, COUNTER_RANGE - outer as u16)
    }

    #[inline]
    pub fn register_count(&self) -> u8 {
        self.register_count
    }

    #[inline]
    pub fn outer_repeats(&self) -> u16 {
        self.outer_repeats
    }

    /// The outermost counter register
    pub fn outer_register(&self) -> Register {
        // register_count <= MAX_CHAIN_REGISTERS < NUM_REGISTERS
        Register::ALL[self.register_count as usize - 1]
    }

    /// Initial value of the outermost register; 256 repeats wraps to 0x00
    pub fn outer_initial_value(&self) -> u8 {
        (COUNTER_RANGE - self.outer_repeats) as u8
    }

    /// Registers used by the loop, innermost first
    pub fn registers(&self) -> impl Iterator<Item = Register> {
        Register::ALL.into_iter().take(self.register_count as usize)
    }

    /// Initial value for each register, innermost first
    pub fn initial_values(&self) -> Vec<u8> {
        let mut values = vec![0u8; self.register_count as usize];
        if let Some(last) = values.last_mut() {
            *last = self.outer_initial_value();
        }
        values
    }
}

impl fmt::Display for LoopConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} register(s), {} outer repeat(s)",
            self.register_count, self.outer_repeats
        )
    }
}

/// Exact cost of running a loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopCost {
    /// Instructions executed, including the register loads
    pub instruction_count: u128,
    /// Clock cycles executed
    pub cycle_count: u128,
    /// Wall-clock time at the request's clock speed
    pub elapsed_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as DeError, SeqDeserializer};
    use serde::Deserialize;

    #[test]
    fn test_new_validation() {
        assert!(LoopConfiguration::new(1, 1).is_ok());
        assert!(LoopConfiguration::new(MAX_CHAIN_REGISTERS, MAX_OUTER_REPEATS).is_ok());

        assert!(matches!(
            LoopConfiguration::new(0, 1),
            Err(DelayError::InvalidRegisterCount(0))
        ));
        assert!(matches!(
            LoopConfiguration::new(16, 1),
            Err(DelayError::InvalidRegisterCount(16))
        ));
        assert!(matches!(
            LoopConfiguration::new(2, 0),
            Err(DelayError::InvalidOuterRepeats(0))
        ));
        assert!(matches!(
            LoopConfiguration::new(2, 257),
            Err(DelayError::InvalidOuterRepeats(257))
        ));
    }

    #[test]
    fn test_initial_values() {
        let config = LoopConfiguration::new(2, 20).unwrap();
        assert_eq!(config.initial_values(), vec![0x00, 0xec]);
        assert_eq!(config.outer_register(), Register::S1);

        let config = LoopConfiguration::new(1, 1).unwrap();
        assert_eq!(config.initial_values(), vec![0xff]);
        assert_eq!(config.outer_register(), Register::S0);
    }

    #[test]
    fn test_full_pass_wraps_to_zero() {
        let config = LoopConfiguration::new(3, 256).unwrap();
        assert_eq!(config.outer_initial_value(), 0x00);
        assert_eq!(config.initial_values(), vec![0, 0, 0]);
    }

    #[test]
    fn test_from_initial_values() {
        let config = LoopConfiguration::from_initial_values(&[0, 0, 0xb4]).unwrap();
        assert_eq!(config.register_count(), 3);
        assert_eq!(config.outer_repeats(), 76);

        let config = LoopConfiguration::from_initial_values(&[0x00]).unwrap();
        assert_eq!(config.outer_repeats(), 256);
    }

    #[test]
    fn test_from_initial_values_rejects() {
        assert!(matches!(
            LoopConfiguration::from_initial_values(&[]),
            Err(DelayError::InvalidRegisterCount(0))
        ));
        assert!(matches!(
            LoopConfiguration::from_initial_values(&[0, 5, 0xf0]),
            Err(DelayError::NonZeroInnerRegister { index: 1, value: 5 })
        ));
        assert!(LoopConfiguration::from_initial_values(&[0; 16]).is_err());
    }

    fn deserialize(register_count: u16, outer_repeats: u16) -> std::result::Result<LoopConfiguration, DeError> {
        let fields = vec![register_count, outer_repeats];
        LoopConfiguration::deserialize(SeqDeserializer::<_, DeError>::new(fields.into_iter()))
    }

    #[test]
    fn test_deserialize_validates() {
        assert_eq!(deserialize(2, 20).unwrap(), LoopConfiguration::new(2, 20).unwrap());
        assert_eq!(deserialize(1, 256).unwrap().outer_initial_value(), 0x00);

        let err = deserialize(0, 1).unwrap_err();
        assert!(err.to_string().contains("Invalid register count: 0"));
        assert!(deserialize(MAX_CHAIN_REGISTERS as u16 + 1, 1).is_err());
        assert!(deserialize(2, 0).is_err());
        assert!(deserialize(2, 257).is_err());
    }

    #[test]
    fn test_registers_innermost_first() {
        let config = LoopConfiguration::new(3, 1).unwrap();
        let regs: Vec<Register> = config.registers().collect();
        assert_eq!(regs, vec![Register::S0, Register::S1, Register::S2]);
    }
}
