//! Database model.
//!
//! This module defines the in-memory **CAN database** assembled by the DBC parser.
//! Messages live in a [`BTreeMap`] keyed by the numeric arbitration ID, so iteration
//! is ascending by ID and a later `BO_` block with the same ID replaces an earlier one.
//! Every other section keeps file order.
//!
//! The parser builds a [`Database`] from scratch on every call; once handed back it is
//! plain data and never touched again by the parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{
    comment::{Comment, CommentTarget},
    message::{Message, MessageKey},
    signal::Signal,
    value_table::{ValueDescription, ValueTable},
};

/// In-memory representation of a DBC file.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Database {
    // --- General information ---
    /// `VERSION` string, empty when the file has none.
    pub version: String,
    /// `NS_` symbols, declaration order, duplicates kept.
    pub symbols: Vec<String>,
    /// `BU_` node names, declaration order, duplicates kept.
    pub ecus: Vec<String>,
    /// Same list as `ecus`; both are filled from the `BU_` section.
    pub nodes: Vec<String>,

    // --- Tables ---
    /// `VAL_TABLE_` constructs in file order.
    pub value_tables: Vec<ValueTable>,
    /// `VAL_` constructs in file order.
    pub value_descriptions: Vec<ValueDescription>,

    // --- Messages ---
    /// `BO_` blocks keyed by arbitration ID.
    pub messages: BTreeMap<u32, Message>,
    /// `BO_TX_BU_` additional transmitters keyed by arbitration ID.
    pub transmitters: BTreeMap<u32, Vec<String>>,

    // --- Comments ---
    /// `CM_` constructs in file order.
    pub comments: Vec<Comment>,
}

impl Database {
    /// Resets every section to empty.
    pub fn clear(&mut self) {
        *self = Database::default();
    }

    // ------------- Messages ------------
    /// Stores a message under `key.id`, replacing any block already stored there.
    /// Returns the replaced message.
    pub(crate) fn insert_message(&mut self, key: MessageKey, signals: Vec<Signal>) -> Option<Message> {
        self.messages.insert(key.id, Message { key, signals })
    }

    /// Returns the message with the given numeric CAN ID.
    pub fn message(&self, id: u32) -> Option<&Message> {
        self.messages.get(&id)
    }

    /// Returns the signals of the message with the given CAN ID.
    pub fn signals(&self, id: u32) -> Option<&[Signal]> {
        self.messages.get(&id).map(|m| m.signals.as_slice())
    }

    /// Returns a message given its name (case-insensitive).
    pub fn message_by_name(&self, name: &str) -> Option<&Message> {
        self.messages
            .values()
            .find(|m| m.key.name.eq_ignore_ascii_case(name))
    }

    /// Iterates messages in ascending ID order.
    pub fn iter_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    /// Message keys in ascending ID order.
    pub fn message_keys(&self) -> impl Iterator<Item = &MessageKey> {
        self.messages.values().map(|m| &m.key)
    }

    // ------------- Tables ------------
    /// First `VAL_TABLE_` with the given name.
    pub fn value_table(&self, name: &str) -> Option<&ValueTable> {
        self.value_tables.iter().find(|t| t.name == name)
    }

    /// Last `VAL_` for a signal of a message (later constructs override earlier ones).
    pub fn value_description(&self, message_id: u32, signal: &str) -> Option<&ValueDescription> {
        self.value_descriptions
            .iter()
            .rev()
            .find(|v| v.message_id == message_id && v.signal == signal)
    }

    // ------------- Others ------------
    /// `BO_TX_BU_` transmitters declared for a message.
    pub fn transmitters(&self, message_id: u32) -> Option<&[String]> {
        self.transmitters.get(&message_id).map(Vec::as_slice)
    }

    /// Comments attached to `target`, in file order.
    pub fn comments_for<'a>(&'a self, target: &'a CommentTarget) -> impl Iterator<Item = &'a str> + 'a {
        self.comments
            .iter()
            .filter(move |c| &c.target == target)
            .map(|c| c.text.as_str())
    }
}
