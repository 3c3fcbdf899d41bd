use pest::iterators::Pair;
use tracing::{debug, warn};

use crate::dbc::scope::ConstructScope;
use crate::types::{database::Database, errors::ActionError, message::MessageKey, signal::Signal};

/// Decode a `BO_` block: header plus the signals already assembled below it.
/// Format: `BO_ <id> <name>: <length> <sender>`
///
/// The header tokens sit at the head of their channels because every nested
/// `SG_` has popped its own. A header with fewer than two numbers or two
/// identifiers is skipped together with its signals.
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let (Some(&id), Some(&length), Some(name), Some(sender)) = (
        scope.numbers.peek_head(0),
        scope.numbers.peek_head(1),
        scope.identifiers.peek_head(0),
        scope.identifiers.peek_head(1),
    ) else {
        let (line, _) = pair.line_col();
        warn!("Incomplete BO_ header at line {}, block skipped", line);
        return Ok(());
    };

    let key: MessageKey = MessageKey {
        id: id.narrow("id")?,
        name: name.clone(),
        length: length.narrow("length")?,
        sender: sender.clone(),
    };
    let signals: Vec<Signal> = scope.take_signals();
    debug!("Message {} ({}) with {} signals", key.name, key.id_hex(), signals.len());

    if let Some(old) = db.insert_message(key, signals) {
        debug!("Message {} replaced {}", old.key.id_hex(), old.key.name);
    }
    Ok(())
}
