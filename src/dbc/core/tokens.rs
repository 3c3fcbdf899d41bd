use pest::iterators::Pair;
use tracing::trace;

use crate::dbc::{
    core::strings,
    grammar::rules,
    scope::{ConstructScope, Numeric},
};
use crate::types::{database::Database, errors::ActionError, signal::Multiplexing};

/// `TOKEN`: push the identifier.
pub(crate) fn identifier(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    trace!("Found token {}", pair.as_str());
    scope.identifiers.push(pair.as_str().to_string());
    Ok(())
}

/// `number`: push a signed integer.
pub(crate) fn number(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let text: &str = pair.as_str();
    let value: i64 = text.parse().map_err(|_| ActionError::MalformedNumber {
        text: text.to_string(),
    })?;
    trace!("Found number {}", value);
    scope.numbers.push(Numeric::Integer(value));
    Ok(())
}

/// `real`: push a decimal (scaling and range fields).
pub(crate) fn real(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let text: &str = pair.as_str();
    let value: f64 = text.parse().map_err(|_| ActionError::MalformedNumber {
        text: text.to_string(),
    })?;
    trace!("Found real {}", value);
    scope.numbers.push(Numeric::Real(value));
    Ok(())
}

/// `sign`: push the raw marker (`+`, `-` or empty).
pub(crate) fn sign(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    trace!("Found sign '{}'", pair.as_str());
    scope.signs.push(pair.as_str().to_string());
    Ok(())
}

/// `phrase`: push the text without quotes.
pub(crate) fn phrase(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let text: String = strings::unquote(pair.as_str());
    trace!("Found phrase \"{}\"", text);
    scope.phrases.push(text);
    Ok(())
}

/// `multiplexer`: remember the tag for the signal being matched.
pub(crate) fn multiplexer(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let tag: &str = pair.as_str();
    let mux: Multiplexing = Multiplexing::from_tag(tag).ok_or_else(|| ActionError::InvalidMultiplexer { tag: tag.to_string() })?;
    scope.set_multiplexer(mux);
    Ok(())
}

/// `receivers`: move this rule's own identifiers off the tail into one list.
pub(crate) fn receivers(scope: &mut ConstructScope, _db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let count: usize = pair
        .clone()
        .into_inner()
        .filter(|p| p.as_rule() == rules::TOKEN)
        .count();

    let mut names: Vec<String> = Vec::with_capacity(count);
    for _ in 0..count {
        names.push(scope.identifiers.pop_tail()?);
    }
    names.reverse();

    scope.receivers.push(names);
    Ok(())
}
