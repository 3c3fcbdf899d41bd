use serde::{Deserialize, Serialize};

/// Definition of a signal within a CAN message (DBC `SG_` line).
///
/// Describes position/bit-length, byte order, sign, scaling (factor/offset),
/// valid range, unit of measure and receiver nodes.
#[derive(Default, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Signal {
    /// Signal name.
    pub name: String,
    /// Bit start in the payload.
    pub start_bit: u16,
    /// Bit length.
    pub bit_length: u16,
    /// Byte order (`@0` Motorola, `@1` Intel).
    pub byte_order: ByteOrder,
    /// Sign marker (`+` unsigned, `-` signed).
    pub signedness: Signedness,
    /// Scaling factor.
    pub factor: f64,
    /// Scaling offset.
    pub offset: f64,
    /// Minimum physical value.
    pub min: f64,
    /// Maximum physical value.
    pub max: f64,
    /// Unit of measure, quotes stripped.
    pub unit: String,
    /// Receiver nodes in declared order.
    pub receivers: Vec<String>,
    /// Multiplexing tag written after the signal name (`M`, `m3`, `m3M`).
    pub multiplexing: Multiplexing,
}

impl Signal {
    /// First declared receiver, or `""` when the list is empty.
    ///
    /// Most files name a single node (often `Vector__XXX`); use
    /// [`Signal::receivers`] when the full list matters.
    pub fn receiver(&self) -> &str {
        self.receivers.first().map(String::as_str).unwrap_or("")
    }

    /// True if `node` is one of the receivers (case-sensitive, like DBC keywords).
    pub fn is_received_by(&self, node: &str) -> bool {
        self.receivers.iter().any(|r| r == node)
    }
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ByteOrder {
    #[default]
    BigEndian, // 0, Motorola
    LittleEndian, // 1, Intel
}

impl ByteOrder {
    /// Map the numeric DBC code to a byte order. Only `0` and `1` are valid.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ByteOrder::BigEndian),
            1 => Some(ByteOrder::LittleEndian),
            _ => None,
        }
    }

    /// Numeric DBC code (`0` or `1`).
    pub fn code(self) -> u8 {
        match self {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        }
    }
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Signedness {
    #[default]
    Unsigned, // +
    Signed, // -
}

impl Signedness {
    /// Interpret the captured sign marker. An empty marker means unsigned.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "" | "+" => Some(Signedness::Unsigned),
            "-" => Some(Signedness::Signed),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Signedness::Unsigned => '+',
            Signedness::Signed => '-',
        }
    }
}

/// Multiplexing tag of a signal.
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Multiplexing {
    #[default]
    None,
    /// `M`: this signal selects the active multiplexed group.
    Multiplexor,
    /// `mN`: present only when the multiplexor equals `N`.
    Multiplexed(u32),
    /// `mNM`: multiplexed by `N` and itself a multiplexor (extended multiplexing).
    MultiplexedMultiplexor(u32),
}

impl Multiplexing {
    /// Parse the raw tag (`M`, `m0`, `m12M`). Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "M" {
            return Some(Multiplexing::Multiplexor);
        }
        let rest: &str = tag.strip_prefix('m')?;
        let (digits, nested) = match rest.strip_suffix('M') {
            Some(d) => (d, true),
            None => (rest, false),
        };
        let value: u32 = digits.parse().ok()?;
        if nested {
            Some(Multiplexing::MultiplexedMultiplexor(value))
        } else {
            Some(Multiplexing::Multiplexed(value))
        }
    }
}
