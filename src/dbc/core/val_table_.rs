use pest::iterators::Pair;
use tracing::debug;

use crate::dbc::scope::ConstructScope;
use crate::types::{
    database::Database,
    errors::ActionError,
    value_table::{ValueTable, ValueTableEntry},
};

/// One `<code> "<label>"` pair inside `VAL_TABLE_` or `VAL_`.
pub(crate) fn decode_entry(scope: &mut ConstructScope, _db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let label: String = scope.phrases.pop_tail()?;
    let code: i64 = scope.numbers.pop_tail()?.as_integer("code")?;
    scope.push_entry(ValueTableEntry { code, label });
    Ok(())
}

/// Named value table.
/// Example: `VAL_TABLE_ DI_gear 7 "DI_GEAR_SNA" 4 "DI_GEAR_D" 0 "DI_GEAR_INVALID" ;`
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let entries: Vec<ValueTableEntry> = scope.take_entries();
    let name: String = scope.identifiers.pop_tail()?;
    debug!("Value table {} with {} entries", name, entries.len());
    db.value_tables.push(ValueTable { name, entries });
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
        let text: &str = r#"VAL_TABLE_ DI_gear 7 "DI_GEAR_SNA" 4 "DI_GEAR_D" 3 "DI_GEAR_N" 2 "DI_GEAR_R" 1 "DI_GEAR_P" 0 "DI_GEAR_INVALID" ;"#;
        apply(rules::VALUE_TABLE, text, &mut scope, &mut db).unwrap();

        let table = db.value_table("DI_gear").unwrap();
        assert_eq!(table.entries.len(), 6);
        assert_eq!(table.entries[0].code, 7);
        assert_eq!(table.entries[0].label, "DI_GEAR_SNA");
        assert_eq!(table.label(2), Some("DI_GEAR_R"));
    }

    #[test]
    fn test_tables_are_isolated() {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database::default();
        apply(rules::VALUE_TABLE, r#"VAL_TABLE_ A 1 "One" 0 "Zero" ;"#, &mut scope, &mut db).unwrap();
        apply(rules::VALUE_TABLE, r#"VAL_TABLE_ B 5 "Five" ;"#, &mut scope, &mut db).unwrap();

        assert_eq!(db.value_tables.len(), 2);
        assert_eq!(db.value_tables[0].entries.len(), 2);
        assert_eq!(db.value_tables[1].entries.len(), 1);
        assert_eq!(db.value_tables[1].label(5), Some("Five"));
    }

    #[test]
    fn test_decode_empty_table() {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database::default();
        apply(rules::VALUE_TABLE, "VAL_TABLE_ Empty ;", &mut scope, &mut db).unwrap();
        assert!(db.value_table("Empty").unwrap().entries.is_empty());
    }
}
