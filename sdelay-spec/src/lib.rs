//! # Software Delay Loop Core Types
//!
//! Core types for generating busy-wait delay loops on an 8-bit,
//! fixed-cycle-cost microcontroller (PicoBlaze register bank).
//!
//! ## Key Features
//! - 16 registers (S0-Sf), 8 bits each
//! - Every instruction costs the same number of clock cycles
//! - Delay loops chain registers as nested overflow counters using the
//!   `ADD sX, 0x01` / `JUMP NZ, loop` idiom
//! - Validated delay requests and solver configuration
//! - Timing model: instruction rate, cycle counts, elapsed seconds

pub mod register;
pub mod instruction;
pub mod timing;
pub mod request;
pub mod loop_config;
pub mod config;
pub mod error;

pub use register::{Register, NUM_REGISTERS};
pub use instruction::{Instruction, Line, DEFAULT_LABEL, INCREMENT};
pub use request::DelayRequest;
pub use loop_config::{LoopConfiguration, LoopCost, COUNTER_RANGE, MAX_OUTER_REPEATS};
pub use config::{ConfigError, SolverConfig, IGNORED_OUTER_OVERHEAD, MAX_CHAIN_REGISTERS};
pub use error::{DelayError, Result};

/// Instructions executed by one ADD/JUMP NZ pair
pub const PAIR_INSTRUCTIONS: u128 = 2;

/// Register width in bits
pub const REGISTER_BITS: u32 = 8;
