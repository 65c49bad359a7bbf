//! The gluescript harness and its embedded glue language.
//!
//! ```txt
//!          +----------+            +--------+                +--------+
//! paths -> |  driver  | - text ->  | engine | - unit/value ->| stdout |
//!          +----------+            +--------+                +--------+
//!                                      |
//!        +-------+            +--------+           +--------+
//! str -> | lexer | - Tokens ->| parser | - Chunk ->| interp |
//!        +-------+            +--------+           +--------+
//! ```
//!
//! The harness resolves a script engine by name, runs one fixed bootstrap
//! activation against it, then compiles and evaluates each supplied script
//! file in order, printing every result as one line.
//!
//! # Examples
//!
//! ```rust
//! use gluescript::Glue;
//! let mut glue = Glue::new();
//! let chunk = glue.compile("1 + 1").unwrap();
//! let value = glue.eval_chunk(&chunk).unwrap();
//! assert_eq!(value.to_string(), "2");
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod compiler;
pub mod context;
pub mod driver;
pub mod engine;
pub mod errors;
pub mod interp;
pub mod libs;
pub mod value;

pub use context::*;
pub use driver::Driver;
pub use engine::{resolve, CompiledUnit, Engine, DEFAULT_ENGINE};
pub use errors::{Error, Result};
pub use value::Value;
