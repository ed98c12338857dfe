//! Timing model: clock speed and cycle cost to instruction rate and elapsed time

use crate::error::{DelayError, Result};

/// Hz per MHz
pub const HZ_PER_MHZ: f64 = 1_000_000.0;

pub(crate) fn check_clock(clock_mhz: f64, cycles_per_instruction: u32) -> Result<()> {
    if !(clock_mhz > 0.0) || !clock_mhz.is_finite() {
        return Err(DelayError::InvalidClockSpeed(clock_mhz));
    }
    if cycles_per_instruction == 0 {
        return Err(DelayError::InvalidCyclesPerInstruction(cycles_per_instruction));
    }
    Ok(())
}

#[inline]
pub(crate) fn rate_unchecked(clock_mhz: f64, cycles_per_instruction: u32) -> f64 {
    clock_mhz * HZ_PER_MHZ / cycles_per_instruction as f64
}

/// Instructions executed per second
pub fn instruction_rate(clock_mhz: f64, cycles_per_instruction: u32) -> Result<f64> {
    check_clock(clock_mhz, cycles_per_instruction)?;
    Ok(rate_unchecked(clock_mhz, cycles_per_instruction))
}

/// Clock cycles spent on `instruction_count` instructions
///
/// Cannot overflow for any loop of at most
/// [`MAX_CHAIN_REGISTERS`](crate::MAX_CHAIN_REGISTERS) registers.
#[inline]
pub fn cycle_count(instruction_count: u128, cycles_per_instruction: u32) -> u128 {
    instruction_count * cycles_per_instruction as u128
}

/// Seconds spent on `instruction_count` instructions
pub fn elapsed_seconds(instruction_count: u128, clock_mhz: f64, cycles_per_instruction: u32) -> f64 {
    let cycles = cycle_count(instruction_count, cycles_per_instruction);
    cycles as f64 / (clock_mhz * HZ_PER_MHZ)
}
