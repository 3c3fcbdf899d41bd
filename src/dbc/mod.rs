//! # dbc
//!
//! `dbc` is the module to work with .dbc files.
//!
//! Parsing is grammar-driven: [`grammar`] holds the PEG grammar (pest syntax) and
//! compiles it at runtime, the engine fires one action per matched rule, and
//! [`DbcParser`] ties both together into a [`Database`](crate::Database).

pub(crate) mod core;
pub(crate) mod engine;
#[cfg(feature = "file")]
mod file;
pub mod grammar;
pub mod parse;
pub mod scope;

#[cfg(feature = "file")]
pub use file::{decode_bytes, from_file};
pub use grammar::{DBC_GRAMMAR, Grammar};
pub use parse::DbcParser;
