//! # candb
//!
//! Rust parser for **Vector DBC** CAN databases.
//!
//! ## Highlights
//! - **Grammar-driven**: the DBC syntax is a PEG grammar compiled at runtime; a
//!   broken grammar is reported as such, separately from malformed input.
//! - **Typed model**: messages keyed by arbitration ID, signals with byte order,
//!   sign, scaling, range, unit, receivers and multiplexing.
//! - **Extras**: value tables (`VAL_TABLE_`), value descriptions (`VAL_`),
//!   comments (`CM_`) and additional transmitters (`BO_TX_BU_`). Other sections
//!   are accepted and skipped.
//! - **Logging** through `tracing`; install any subscriber to see it.
//!
//! ```
//! use candb::{DbcParser, Signedness};
//!
//! let text = "BO_ 1160 DAS_steeringControl: 4 NEO
//!  SG_ DAS_steeringAngleRequest : 6|15@0+ (0.1,-1638.35) [-1638.35|1638.35] \"deg\"  EPAS
//! ";
//! let mut parser = DbcParser::new();
//! assert!(parser.parse(text));
//!
//! let db = parser.into_database();
//! let signal = &db.signals(1160).unwrap()[0];
//! assert_eq!(signal.factor, 0.1);
//! assert_eq!(signal.signedness, Signedness::Unsigned);
//! ```

pub mod dbc;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    comment::{Comment, CommentTarget},
    database::Database,
    errors::{ActionError, DbcFileError, DbcParseError, GrammarError},
    message::{Message, MessageKey},
    signal::{ByteOrder, Multiplexing, Signal, Signedness},
    value_table::{Labels, ValueDescription, ValueTable, ValueTableEntry},
};

pub use crate::dbc::DbcParser;
