use serde::{Deserialize, Serialize};

use crate::types::signal::Signal;

/// Header of a `BO_` block: `BO_ <id> <name>: <length> <sender>`.
///
/// Equality is structural. The database indexes messages by `id` only, so two
/// keys that differ in name but share an id collide there.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MessageKey {
    /// Numeric CAN arbitration ID (base 10, as written in the file).
    pub id: u32,
    /// Message name.
    pub name: String,
    /// Payload length in bytes (DLC).
    pub length: u32,
    /// Transmitting node.
    pub sender: String,
}

impl MessageKey {
    /// Extended (29-bit) frames are written with bit 31 set.
    pub fn is_extended(&self) -> bool {
        self.id & 0x8000_0000 != 0
    }

    /// Arbitration ID with the extended-frame flag removed.
    pub fn raw_id(&self) -> u32 {
        self.id & 0x1FFF_FFFF
    }

    /// Normalized `0x…` uppercase representation of [`MessageKey::raw_id`].
    pub fn id_hex(&self) -> String {
        format!("0x{:X}", self.raw_id())
    }
}

/// A message and its signals, in the order they were declared in the block.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Message {
    pub key: MessageKey,
    pub signals: Vec<Signal>,
}

impl Message {
    pub fn get_signal_by_name(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }
}
