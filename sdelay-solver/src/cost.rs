//! Exact cost of a delay loop
//!
//! Every pass through the loop body executes ADD/JUMP NZ pairs from the
//! innermost register outward until one of them does not wrap. Incrementing
//! register `k` once therefore costs:
//!
//! ```text
//! P(0) = 2
//! P(k) = 256 * P(k-1) + 2      (register k-1 wraps once, then k's own pair)
//!      = 2 * (256^(k+1) - 1) / 255
//! ```
//!
//! Inner registers start at 0 and the outermost is incremented
//! `outer_repeats` times, so the loop executes
//! `register_count + outer_repeats * P(register_count - 1)` instructions.

use sdelay_spec::{timing, DelayRequest, LoopConfiguration, LoopCost, COUNTER_RANGE, PAIR_INSTRUCTIONS};

/// Instructions spent on one increment of register `index`, inner wraps included
pub fn increment_cost(index: u8) -> u128 {
    (0..index).fold(PAIR_INSTRUCTIONS, |cost, _| {
        cost * COUNTER_RANGE as u128 + PAIR_INSTRUCTIONS
    })
}

/// Instructions executed by the loop, including one LOAD per register
pub fn instruction_count(config: &LoopConfiguration) -> u128 {
    let loads = config.register_count() as u128;
    let outer_cost = increment_cost(config.register_count() - 1);
    loads + config.outer_repeats() as u128 * outer_cost
}

/// Exact instructions, cycles and seconds of `config` at the request's clock
pub fn evaluate(config: &LoopConfiguration, request: &DelayRequest) -> LoopCost {
    let instruction_count = instruction_count(config);
    LoopCost {
        instruction_count,
        cycle_count: timing::cycle_count(instruction_count, request.cycles_per_instruction()),
        elapsed_seconds: request.elapsed_seconds(instruction_count),
    }
}

/// Longest delay a chain of `register_count` registers can produce; 0 for no registers
pub fn max_instruction_count(register_count: u8) -> u128 {
    match register_count.checked_sub(1) {
        Some(outer) => register_count as u128 + COUNTER_RANGE as u128 * increment_cost(outer),
        None => 0,
    }
}
