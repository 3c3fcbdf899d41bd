use pest::iterators::Pair;

use crate::dbc::scope::ConstructScope;
use crate::types::{database::Database, errors::ActionError};

/// `VERSION "<text>"`: the last phrase is the version; a later VERSION replaces it.
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, _pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    db.version = scope
        .phrases
        .pop_tail()
        .map_err(|_| ActionError::MissingVersion)?;
    scope.phrases.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dbc::engine::tests::apply;
    use crate::dbc::grammar::rules;
    use crate::dbc::scope::ConstructScope;
    use crate::types::database::Database;

    #[test]
    fn test_decode() {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database::default();
        apply(rules::VERSION, r#"VERSION "1.0.2""#, &mut scope, &mut db).unwrap();
        assert_eq!(db.version, "1.0.2");
        assert!(scope.phrases.is_empty());
    }

    #[test]
    fn test_decode_empty() {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database {
            version: "old".into(),
            ..Default::default()
        };
        apply(rules::VERSION, r#"VERSION """#, &mut scope, &mut db).unwrap();
        assert_eq!(db.version, "");
    }
}
