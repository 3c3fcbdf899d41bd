use pest::iterators::Pair;

use crate::dbc::scope::ConstructScope;
use crate::types::{
    database::Database,
    errors::ActionError,
    value_table::{ValueDescription, ValueTableEntry},
};

/// Value descriptions of one signal.
/// Example: `VAL_ 1160 DAS_steeringControlType 1 "ANGLE_CONTROL" 0 "NONE" ;`
///
/// `VAL_` lines for environment variables carry no message id and are left to
/// the grammar's tolerated sections.
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let entries: Vec<ValueTableEntry> = scope.take_entries();
    let signal: String = scope.identifiers.pop_tail()?;
    let message_id: u32 = scope.numbers.pop_tail()?.narrow("id")?;
    db.value_descriptions.push(ValueDescription {
        message_id,
        signal,
        entries,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dbc::engine::tests::apply;
    use crate::dbc::grammar::rules;
    use crate::dbc::scope::ConstructScope;
    use crate::types::{database::Database, value_table::Labels};

    #[test]
    fn test_decode() {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database::default();
        let text: &str = r#"VAL_ 1160 DAS_steeringControlType 1 "ANGLE_CONTROL" 3 "DISABLED" 0 "NONE" 2 "RESERVED" ;"#;
        apply(rules::VALUE_DESCRIPTION, text, &mut scope, &mut db).unwrap();

        let desc = db.value_description(1160, "DAS_steeringControlType").unwrap();
        assert_eq!(desc.entries.len(), 4);
        assert_eq!(desc.label(3), Some("DISABLED"));
        assert!(scope.numbers.drain().is_empty());
    }
}
