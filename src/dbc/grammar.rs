//! PEG grammar loading.
//!
//! The DBC grammar is plain pest text shipped inside the crate ([`DBC_GRAMMAR`]).
//! It is validated and compiled at runtime by `pest_meta` and interpreted by `pest_vm`,
//! so the parser binds its semantic actions to rules by **name**, and a broken grammar
//! surfaces as a [`GrammarError`] instead of a per-file parse failure.

use std::collections::BTreeSet;
use std::fmt;

use pest::error::Error;
use pest::iterators::Pairs;
use pest_vm::Vm;

use crate::types::errors::GrammarError;

/// Built-in DBC grammar source.
pub const DBC_GRAMMAR: &str = include_str!("dbc.pest");

/// Rule names the semantic actions are bound to.
pub mod rules {
    pub const START: &str = "dbc";

    // lexicon
    pub const TOKEN: &str = "TOKEN";
    pub const NUMBER: &str = "number";
    pub const REAL: &str = "real";
    pub const SIGN: &str = "sign";
    pub const PHRASE: &str = "phrase";
    pub const MULTIPLEXER: &str = "multiplexer";

    // constructs
    pub const VERSION: &str = "version";
    pub const SYMBOLS: &str = "symbols";
    pub const ECUS: &str = "ecus";
    pub const VALUE_ENTRY: &str = "value_entry";
    pub const VALUE_TABLE: &str = "value_table";
    pub const VALUE_DESCRIPTION: &str = "value_description";
    pub const MESSAGE: &str = "message";
    pub const SIGNAL: &str = "signal";
    pub const RECEIVERS: &str = "receivers";
    pub const SKIPPED_SIGNAL: &str = "skipped_signal";
    pub const TRANSMITTERS: &str = "transmitters";
    pub const COMMENT: &str = "comment";

    // comment targets
    pub const NODE_TARGET: &str = "node_target";
    pub const MESSAGE_TARGET: &str = "message_target";
    pub const SIGNAL_TARGET: &str = "signal_target";
    pub const ENV_VAR_TARGET: &str = "env_var_target";
}

/// A compiled grammar, reusable for any number of parses.
pub struct Grammar {
    vm: Vm,
    rules: BTreeSet<String>,
}

impl Grammar {
    /// Validates and compiles `source` (pest syntax).
    pub fn load(source: &str) -> Result<Self, GrammarError> {
        let (_, optimized) = pest_meta::parse_and_optimize(source).map_err(|errors| GrammarError::Load {
            errors: errors.iter().map(ToString::to_string).collect(),
        })?;
        if optimized.is_empty() {
            return Err(GrammarError::Load {
                errors: vec!["grammar defines no rules".to_string()],
            });
        }
        let rules: BTreeSet<String> = optimized.iter().map(|r| r.name.clone()).collect();
        Ok(Self {
            vm: Vm::new(optimized),
            rules,
        })
    }

    /// Compiles the built-in [`DBC_GRAMMAR`].
    pub fn dbc() -> Result<Self, GrammarError> {
        Self::load(DBC_GRAMMAR)
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains(name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    /// Matches `input` starting from `rule`.
    ///
    /// The rule must exist; check with [`Grammar::has_rule`] first.
    pub fn parse<'a>(&'a self, rule: &'a str, input: &'a str) -> Result<Pairs<'a, &'a str>, Error<&'a str>> {
        self.vm.parse(rule, input)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar").field("rules", &self.rules).finish()
    }
}
