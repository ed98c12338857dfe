//! Outer-loop search
//!
//! Linear scan over outer repeat counts for a fixed register count. The exact
//! cost is strictly increasing in the repeat count, so the first count that
//! meets the target is the smallest one.

use crate::cost::evaluate;
use sdelay_spec::{DelayError, DelayRequest, LoopConfiguration, Result, MAX_OUTER_REPEATS};

/// Smallest outer repeat count whose exact delay reaches the target
///
/// Fails with the recoverable [`DelayError::RepeatLimitExceeded`] when even
/// 256 repeats fall short.
pub fn search_outer_repeats(register_count: u8, request: &DelayRequest) -> Result<u16> {
    for outer in 1..=MAX_OUTER_REPEATS {
        let config = LoopConfiguration::new(register_count, outer)?;
        let cost = evaluate(&config, request);

        tracing::trace!(
            register_count,
            outer,
            elapsed = cost.elapsed_seconds,
            "outer-loop candidate"
        );

        if cost.elapsed_seconds >= request.target_seconds() {
            return Ok(outer);
        }
    }

    Err(DelayError::RepeatLimitExceeded { register_count })
}
