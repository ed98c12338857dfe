//! Capacity estimate: how many 8-bit registers a delay needs
//!
//! Each extra register multiplies the reachable iteration space by 256 and
//! adds one ADD/JUMP pair per level, so the dummy instruction count is
//! divided by `sizing_divisor^(registers-1)` before comparing against
//! `256^registers`. The outermost register's own overhead is left out.
//! The result only seeds the outer-loop search.

use sdelay_spec::{SolverConfig, COUNTER_RANGE};

/// Whether `registers` registers cover `dummy_instructions` by the estimate
pub fn covers(dummy_instructions: f64, registers: u8, config: &SolverConfig) -> bool {
    let levels = registers as i32;
    let scaled = dummy_instructions / config.sizing_divisor.powi(levels - 1);
    scaled <= (COUNTER_RANGE as f64).powi(levels)
}

/// Smallest register count covering `dummy_instructions`, or `None` past the ceiling
pub fn required_registers(dummy_instructions: f64, config: &SolverConfig) -> Option<u8> {
    let mut registers = 1;
    while !covers(dummy_instructions, registers, config) {
        if registers >= config.max_registers {
            return None;
        }
        registers += 1;
    }
    Some(registers)
}
