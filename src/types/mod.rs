//! # types
//!
//! `types` is the module containing all the useful public structs of the crate

pub mod comment;
pub mod database;
pub mod errors;
pub mod message;
pub mod signal;
pub mod value_table;
