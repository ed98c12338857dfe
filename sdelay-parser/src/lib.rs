//! Delay Loop Listing Parser
//!
//! Read emitted delay-loop listings back into structured lines and loop
//! configurations.
//!
//! ## Example
//!
//! ```rust
//! use sdelay_parser::recover_configuration;
//!
//! let source = r#"
//!     ; Software delay loop
//!     LOAD S0, 0x00
//!     LOAD S1, 0xec
//!     loop:
//!         ADD S0, 0x01
//!         JUMP NZ, loop
//!         ADD S1, 0x01
//!         JUMP NZ, loop
//! "#;
//!
//! let recovered = recover_configuration(source).unwrap();
//! assert_eq!(recovered.configuration.outer_repeats(), 20);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod listing;

pub use error::{ParseError, Result};
pub use parser::{parse_line, parse_register};
pub use listing::{parse_listing, recover_configuration, RecoveredLoop};
