use pest::iterators::Pair;

use crate::dbc::scope::ConstructScope;
use crate::types::{database::Database, errors::ActionError};

/// `NS_ :` followed by indented symbol names, one or more per line.
/// A later NS_ section replaces the list.
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    db.symbols = scope.identifiers.drain();
    Ok(())
}
