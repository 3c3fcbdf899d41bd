use std::io;
use thiserror::Error;

use crate::dbc::scope::Category;

/// Errors produced while loading a grammar definition.
///
/// These point at a broken grammar source, never at the `.dbc` text being parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("Unable to load grammar. \nError: {}", errors.join("\n"))]
    Load { errors: Vec<String> },
    #[error("Action bound to rule '{rule}' which the grammar does not define")]
    UnknownRule { rule: String },
    #[error("Grammar does not define the start rule '{rule}'")]
    MissingStartRule { rule: String },
}

/// Errors raised by a semantic action while a construct is being assembled.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActionError {
    #[error("No {category} left to consume")]
    EmptyChannel { category: Category },
    #[error("Malformed numeric literal '{text}'")]
    MalformedNumber { text: String },
    #[error("Field '{field}' requires an integer, found {value}")]
    IntegerExpected { field: &'static str, value: f64 },
    #[error("Field '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("Invalid byte order code {code} (expected 0 or 1)")]
    InvalidByteOrder { code: i64 },
    #[error("Invalid sign marker '{marker}'")]
    InvalidSign { marker: String },
    #[error("Invalid multiplexer tag '{tag}'")]
    InvalidMultiplexer { tag: String },
    #[error("Version phrase not found")]
    MissingVersion,
}

/// Errors produced while parsing DBC text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DbcParseError {
    #[error("Input is empty")]
    EmptyInput,
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("Syntax error at {line}:{column}. \nError: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Rule '{rule}' failed. \nError: {source}")]
    Action {
        rule: String,
        #[source]
        source: ActionError,
    },
}

/// Errors produced while reading and parsing a `.dbc` file.
#[derive(Debug, Error)]
pub enum DbcFileError {
    #[error("Not a valid .dbc file: {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse '{path}'. \nError: {source}")]
    Parse {
        path: String,
        #[source]
        source: DbcParseError,
    },
}
