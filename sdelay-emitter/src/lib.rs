//! # Delay Loop Emitter
//!
//! Render a sized delay loop as PicoBlaze-style assembly text.
//!
//! The emitter performs no I/O: it returns the listing as an ordered
//! sequence of lines. Writing them out is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use sdelay_spec::DelayRequest;
//! use sdelay_solver::solve;
//! use sdelay_emitter::{emit, render};
//!
//! let request = DelayRequest::new(10.0, 2, 0.002).unwrap();
//! let solution = solve(&request).unwrap();
//! let lines = emit(&request, &solution.configuration, &solution.cost);
//! print!("{}", render(&lines));
//! ```

pub mod error;
pub mod formatter;
pub mod emitter;

pub use error::{EmitterError, Result};
pub use emitter::{emit, emit_lines, emit_with, is_valid_label, render, EmitOptions, HEADER_LINES};
pub use formatter::{format, format_byte, format_line};
