use pest::iterators::Pair;
use tracing::warn;

use crate::dbc::scope::{ConstructScope, Numeric};
use crate::types::{
    database::Database,
    errors::ActionError,
    signal::{ByteOrder, Multiplexing, Signal, Signedness},
};

/// Decode a `SG_` line belonging to the **current message** (the enclosing BO_).
/// Format:
/// SG_ <name> [M|mX]: <bit_start>|<bit_length>@<endian><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receivers...>
///
/// The signal's tokens are the most recent ones in every channel, so they are
/// popped back in reverse declaration order. The message header stays at the head.
pub(crate) fn decode(scope: &mut ConstructScope, _db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let receivers: Vec<String> = scope.receivers.pop_tail()?;
    let unit: String = scope.phrases.pop_tail()?;

    let max: f64 = scope.numbers.pop_tail()?.as_f64();
    let min: f64 = scope.numbers.pop_tail()?.as_f64();
    let offset: f64 = scope.numbers.pop_tail()?.as_f64();
    let factor: f64 = scope.numbers.pop_tail()?.as_f64();

    let marker: String = scope.signs.pop_tail()?;
    let signedness: Signedness = Signedness::from_marker(&marker).ok_or(ActionError::InvalidSign { marker })?;

    let code: i64 = scope.numbers.pop_tail()?.as_integer("byte_order")?;
    let byte_order: ByteOrder = ByteOrder::from_code(code).ok_or(ActionError::InvalidByteOrder { code })?;

    let bit_length: Numeric = scope.numbers.pop_tail()?;
    let start_bit: Numeric = scope.numbers.pop_tail()?;
    let name: String = scope.identifiers.pop_tail()?;
    let multiplexing: Multiplexing = scope.take_multiplexer();

    scope.push_signal(Signal {
        name,
        start_bit: start_bit.narrow("start_bit")?,
        bit_length: bit_length.narrow("bit_length")?,
        byte_order,
        signedness,
        factor,
        offset,
        min,
        max,
        unit,
        receivers,
        multiplexing,
    });
    Ok(())
}

/// Malformed `SG_` line inside a `BO_` block: logged and dropped.
pub(crate) fn skip(_scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let (line, _) = pair.line_col();
    warn!("Malformed SG_ at line {} skipped: {}", line, pair.as_str().trim_end());
    Ok(())
}
