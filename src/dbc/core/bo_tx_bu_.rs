use pest::iterators::Pair;

use crate::dbc::scope::ConstructScope;
use crate::types::{database::Database, errors::ActionError};

/// Parse `BO_TX_BU_` lines assigning additional transmit-capable nodes to a message.
/// Example: `BO_TX_BU_ 123 : NodeA,NodeB;`
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let id: u32 = scope.numbers.pop_tail()?.narrow("id")?;

    let nodes: &mut Vec<String> = db.transmitters.entry(id).or_default();
    for name in scope.identifiers.drain() {
        if !nodes.contains(&name) {
            nodes.push(name);
        }
    }
    Ok(())
}
