//! # Delay Loop Solver
//!
//! Size a nested-counter delay loop for a [`DelayRequest`].
//!
//! Sizing runs in three steps:
//!
//! 1. **Capacity estimate**: smallest register count whose iteration space
//!    covers the dummy instruction count (a heuristic seed)
//! 2. **Outer-loop search**: smallest outer repeat count (1-256) whose exact
//!    delay reaches the target
//! 3. **Resize**: if 256 repeats fall short, retry with one more register,
//!    up to the configured ceiling; if the estimate over-sized, step down
//!
//! ## Example
//!
//! ```rust
//! use sdelay_spec::DelayRequest;
//! use sdelay_solver::solve;
//!
//! let request = DelayRequest::new(10.0, 2, 0.002).unwrap();
//! let solution = solve(&request).unwrap();
//! assert!(solution.cost.elapsed_seconds >= 0.002);
//! println!("{}", solution.configuration);
//! ```

pub mod capacity;
pub mod cost;
pub mod search;
pub mod solver;

pub use capacity::required_registers;
pub use cost::{evaluate, increment_cost, instruction_count, max_instruction_count};
pub use search::search_outer_repeats;
pub use solver::{Solution, Solver};

use sdelay_spec::{DelayRequest, Result};

/// Solve with the default configuration
pub fn solve(request: &DelayRequest) -> Result<Solution> {
    Solver::default().solve(request)
}
