//! Delay request: the three scalars a caller supplies

use crate::error::{DelayError, Result};
use crate::timing;
use serde::Serialize;
use std::fmt;

/// A validated request for a software delay
///
/// Fields are private so every instance has passed [`DelayRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayRequest {
    clock_mhz: f64,
    cycles_per_instruction: u32,
    target_seconds: f64,
}

impl DelayRequest {
    /// Validate and build a request
    pub fn new(clock_mhz: f64, cycles_per_instruction: u32, target_seconds: f64) -> Result<Self> {
        timing::check_clock(clock_mhz, cycles_per_instruction)?;
        if !(target_seconds > 0.0) || !target_seconds.is_finite() {
            return Err(DelayError::InvalidTargetDelay(target_seconds));
        }

        Ok(Self {
            clock_mhz,
            cycles_per_instruction,
            target_seconds,
        })
    }

    #[inline]
    pub fn clock_mhz(&self) -> f64 {
        self.clock_mhz
    }

    #[inline]
    pub fn cycles_per_instruction(&self) -> u32 {
        self.cycles_per_instruction
    }

    #[inline]
    pub fn target_seconds(&self) -> f64 {
        self.target_seconds
    }

    /// Instructions executed per second at this clock
    pub fn instruction_rate(&self) -> f64 {
        timing::rate_unchecked(self.clock_mhz, self.cycles_per_instruction)
    }

    /// Continuous estimate of instructions needed to fill the target delay
    pub fn dummy_instruction_count(&self) -> f64 {
        self.instruction_rate() * self.target_seconds
    }

    /// Seconds taken by `instruction_count` instructions at this clock
    pub fn elapsed_seconds(&self, instruction_count: u128) -> f64 {
        timing::elapsed_seconds(instruction_count, self.clock_mhz, self.cycles_per_instruction)
    }
}

impl fmt::Display for DelayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} s at {} MHz, {} cycles/instruction",
            self.target_seconds, self.clock_mhz, self.cycles_per_instruction
        )
    }
}
