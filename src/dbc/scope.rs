//! Per-construct token accumulators.
//!
//! Leaf rules push to the **tail** of their category channel as the grammar matches.
//! A nested rule (`signal`, `value_entry`, `receivers`) completes while its own tokens
//! are still the most recent entries, so it pops them back from the tail in reverse
//! order. An enclosing rule (`message`, `transmitters`) fires after all its children
//! have consumed their tokens, so its own operands are still at the **head** and are
//! read by index. The engine calls [`ConstructScope::drain_all`] after every top-level
//! construct.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{errors::ActionError, signal::Multiplexing, signal::Signal, value_table::ValueTableEntry};

/// Token category held by a [`Channel`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    Identifier,
    Number,
    Phrase,
    Sign,
    Receivers,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Category::Identifier => "identifier",
            Category::Number => "number",
            Category::Phrase => "phrase",
            Category::Sign => "sign",
            Category::Receivers => "receiver list",
        };
        f.write_str(name)
    }
}

/// Numeric leaf as captured by `number` (integer) or `real` (decimal) rules.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Numeric {
    Integer(i64),
    Real(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(v) => v as f64,
            Numeric::Real(v) => v,
        }
    }

    /// Integer value, or [`ActionError::IntegerExpected`] for a decimal literal.
    pub fn as_integer(self, field: &'static str) -> Result<i64, ActionError> {
        match self {
            Numeric::Integer(v) => Ok(v),
            Numeric::Real(value) => Err(ActionError::IntegerExpected { field, value }),
        }
    }

    /// Integer value narrowed to `T`.
    pub fn narrow<T: TryFrom<i64>>(self, field: &'static str) -> Result<T, ActionError> {
        let value: i64 = self.as_integer(field)?;
        T::try_from(value).map_err(|_| ActionError::OutOfRange { field, value })
    }
}

/// FIFO-push / dual-end-read accumulator for one token category.
#[derive(Clone, Debug)]
pub(crate) struct Channel<T> {
    category: Category,
    items: VecDeque<T>,
}

impl<T> Channel<T> {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            items: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the most recently pushed value.
    pub(crate) fn pop_tail(&mut self) -> Result<T, ActionError> {
        self.items.pop_back().ok_or(ActionError::EmptyChannel {
            category: self.category,
        })
    }

    /// Reads the value pushed `index`-th since the last drain, without removing it.
    pub(crate) fn peek_head(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes every value in push order, leaving the channel empty.
    pub(crate) fn drain(&mut self) -> Vec<T> {
        self.items.drain(..).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

/// State shared by all rule actions while one top-level construct is parsed.
#[derive(Clone, Debug)]
pub(crate) struct ConstructScope {
    pub(crate) identifiers: Channel<String>,
    pub(crate) numbers: Channel<Numeric>,
    pub(crate) phrases: Channel<String>,
    pub(crate) signs: Channel<String>,
    pub(crate) receivers: Channel<Vec<String>>,
    /// `value_entry` pairs waiting for their `VAL_TABLE_`/`VAL_` to close.
    entries: Vec<ValueTableEntry>,
    /// Signals waiting for their `BO_` block to close.
    signals: Vec<Signal>,
    /// Tag of the signal currently being matched.
    multiplexer: Option<Multiplexing>,
}

impl Default for ConstructScope {
    fn default() -> Self {
        Self {
            identifiers: Channel::new(Category::Identifier),
            numbers: Channel::new(Category::Number),
            phrases: Channel::new(Category::Phrase),
            signs: Channel::new(Category::Sign),
            receivers: Channel::new(Category::Receivers),
            entries: Vec::new(),
            signals: Vec::new(),
            multiplexer: None,
        }
    }
}

impl ConstructScope {
    pub(crate) fn push_entry(&mut self, entry: ValueTableEntry) {
        self.entries.push(entry);
    }

    /// Takes the pending value entries; the next table starts empty.
    pub(crate) fn take_entries(&mut self) -> Vec<ValueTableEntry> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn push_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub(crate) fn take_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    pub(crate) fn set_multiplexer(&mut self, tag: Multiplexing) {
        self.multiplexer = Some(tag);
    }

    pub(crate) fn take_multiplexer(&mut self) -> Multiplexing {
        self.multiplexer.take().unwrap_or_default()
    }

    /// Clears every channel and pending buffer.
    pub(crate) fn drain_all(&mut self) {
        self.identifiers.clear();
        self.numbers.clear();
        self.phrases.clear();
        self.signs.clear();
        self.receivers.clear();
        self.entries.clear();
        self.signals.clear();
        self.multiplexer = None;
    }

    #[cfg(test)]
    pub(crate) fn is_clean(&self) -> bool {
        self.identifiers.is_empty()
            && self.numbers.is_empty()
            && self.phrases.is_empty()
            && self.signs.is_empty()
            && self.receivers.is_empty()
            && self.entries.is_empty()
            && self.signals.is_empty()
            && self.multiplexer.is_none()
    }
}
