//! Semantic action engine.
//!
//! Actions are plain functions bound to grammar rules by name. [`SemanticActions::run`]
//! walks the match tree post-order, so every action fires after the actions of the
//! rules nested in it, and resets the [`ConstructScope`] after each top-level construct.

use std::collections::BTreeMap;

use pest::iterators::Pair;
use tracing::{debug, trace};

use crate::dbc::{
    core::{bo_, bo_tx_bu_, bu_, cm_, ns_, sg_, tokens, val_, val_table_, version},
    grammar::{Grammar, rules},
    scope::ConstructScope,
};
use crate::types::{
    database::Database,
    errors::{ActionError, DbcParseError, GrammarError},
};

pub(crate) type Action = fn(&mut ConstructScope, &mut Database, &Pair<'_, &str>) -> Result<(), ActionError>;

/// Rule name → action.
#[derive(Clone)]
pub(crate) struct SemanticActions {
    table: BTreeMap<&'static str, Action>,
}

impl SemanticActions {
    pub(crate) fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Actions for the built-in DBC grammar.
    pub(crate) fn standard() -> Self {
        let mut actions: SemanticActions = Self::empty();

        // lexicon
        actions.bind(rules::TOKEN, tokens::identifier);
        actions.bind(rules::NUMBER, tokens::number);
        actions.bind(rules::REAL, tokens::real);
        actions.bind(rules::SIGN, tokens::sign);
        actions.bind(rules::PHRASE, tokens::phrase);
        actions.bind(rules::MULTIPLEXER, tokens::multiplexer);
        actions.bind(rules::RECEIVERS, tokens::receivers);

        // constructs
        actions.bind(rules::VERSION, version::decode);
        actions.bind(rules::SYMBOLS, ns_::decode);
        actions.bind(rules::ECUS, bu_::decode);
        actions.bind(rules::VALUE_ENTRY, val_table_::decode_entry);
        actions.bind(rules::VALUE_TABLE, val_table_::decode);
        actions.bind(rules::VALUE_DESCRIPTION, val_::decode);
        actions.bind(rules::SIGNAL, sg_::decode);
        actions.bind(rules::SKIPPED_SIGNAL, sg_::skip);
        actions.bind(rules::MESSAGE, bo_::decode);
        actions.bind(rules::TRANSMITTERS, bo_tx_bu_::decode);
        actions.bind(rules::COMMENT, cm_::decode);

        actions
    }

    /// Binds `action` to `rule`, replacing any previous binding.
    pub(crate) fn bind(&mut self, rule: &'static str, action: Action) {
        self.table.insert(rule, action);
    }

    pub(crate) fn bound_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    /// Fails on the first bound rule that `grammar` does not define.
    pub(crate) fn check(&self, grammar: &Grammar) -> Result<(), GrammarError> {
        match self.bound_rules().find(|rule| !grammar.has_rule(rule)) {
            Some(rule) => Err(GrammarError::UnknownRule {
                rule: rule.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fires the actions for every construct under `root` into `db`.
    pub(crate) fn run(&self, root: Pair<'_, &str>, db: &mut Database) -> Result<(), DbcParseError> {
        let mut scope: ConstructScope = ConstructScope::default();

        for construct in root.into_inner() {
            let (line, _) = construct.line_col();
            debug!("Construct '{}' at line {}", construct.as_rule(), line);

            let result: Result<(), DbcParseError> = self.visit(&construct, &mut scope, db);
            scope.drain_all();
            result?;
        }
        Ok(())
    }

    fn visit(&self, pair: &Pair<'_, &str>, scope: &mut ConstructScope, db: &mut Database) -> Result<(), DbcParseError> {
        for child in pair.clone().into_inner() {
            self.visit(&child, scope, db)?;
        }

        let rule: &str = pair.as_rule();
        if let Some(action) = self.table.get(rule) {
            trace!("Action '{}' on {:?}", rule, pair.as_str());
            action(scope, db, pair).map_err(|source| DbcParseError::Action {
                rule: rule.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
