use pest::iterators::Pair;
use tracing::debug;

use crate::dbc::scope::ConstructScope;
use crate::types::{database::Database, errors::ActionError};

/// Decode the BU_ node list and register the names in the database.
/// Example: `BU_: ECU1 ECU2 ECU3`
///
/// Names may also continue on indented lines below the keyword. A later BU_
/// section replaces the list.
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let names: Vec<String> = scope.identifiers.drain();
    debug!("Found {} nodes", names.len());
    db.ecus = names.clone();
    db.nodes = names;
    Ok(())
}
