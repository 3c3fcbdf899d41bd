use serde::{Deserialize, Serialize};

/// One `<code> "<label>"` pair.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ValueTableEntry {
    pub code: i64,
    pub label: String,
}

/// Named table from a `VAL_TABLE_` construct.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ValueTable {
    pub name: String,
    pub entries: Vec<ValueTableEntry>,
}

/// Value descriptions bound to one signal of one message (`VAL_ <id> <signal> ... ;`).
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ValueDescription {
    pub message_id: u32,
    pub signal: String,
    pub entries: Vec<ValueTableEntry>,
}

/// Lookup by code, shared by tables and descriptions.
pub trait Labels {
    fn entries(&self) -> &[ValueTableEntry];

    /// Label of the first entry with `code`, if any.
    fn label(&self, code: i64) -> Option<&str> {
        self.entries()
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
    }
}

impl Labels for ValueTable {
    fn entries(&self) -> &[ValueTableEntry] {
        &self.entries
    }
}

impl Labels for ValueDescription {
    fn entries(&self) -> &[ValueTableEntry] {
        &self.entries
    }
}
