use std::borrow::Cow;
use std::fmt;

use pest::error::{Error, LineColLocation};
use tracing::{Level, error, trace, warn};

use crate::dbc::{
    core::strings,
    engine::SemanticActions,
    grammar::{DBC_GRAMMAR, Grammar, rules},
};
use crate::types::{
    database::Database,
    errors::{DbcParseError, GrammarError},
};

/// Grammar-driven DBC parser.
///
/// Every call loads the grammar, matches the whole text and fires the semantic
/// actions into a fresh [`Database`]. A parser can be reused; each call replaces
/// the database of the previous one.
///
/// # Example
/// ```
/// use candb::DbcParser;
///
/// let mut parser = DbcParser::new();
/// assert!(parser.parse("VERSION \"1.0\"\nBU_: NEO EPAS\n"));
/// assert_eq!(parser.database().ecus, vec!["NEO", "EPAS"]);
/// ```
pub struct DbcParser {
    database: Database,
    grammar_source: Cow<'static, str>,
    actions: SemanticActions,
}

impl DbcParser {
    /// Parser for the built-in grammar.
    pub fn new() -> Self {
        Self::with_grammar(DBC_GRAMMAR)
    }

    /// Parser for an alternate grammar source (pest syntax).
    ///
    /// The grammar is only validated when parsing. It must define `dbc` and every
    /// rule the standard actions are bound to.
    pub fn with_grammar(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            database: Database::default(),
            grammar_source: source.into(),
            actions: SemanticActions::standard(),
        }
    }

    /// Parses `text`, returning `true` on success.
    ///
    /// Never panics on bad input. The cause of a failure is logged; use
    /// [`DbcParser::try_parse`] to get it back.
    pub fn parse(&mut self, text: &str) -> bool {
        match self.try_parse(text) {
            Ok(()) => true,
            Err(DbcParseError::Grammar(e)) => {
                error!("{}", e);
                false
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Parses `text` into a fresh database.
    ///
    /// On failure the database keeps whatever was assembled before the error.
    pub fn try_parse(&mut self, text: &str) -> Result<(), DbcParseError> {
        self.database.clear();

        if text.is_empty() {
            return Err(DbcParseError::EmptyInput);
        }

        let grammar: Grammar = Grammar::load(&self.grammar_source)?;
        self.actions.check(&grammar)?;
        if !grammar.has_rule(rules::START) {
            return Err(GrammarError::MissingStartRule {
                rule: rules::START.to_string(),
            }
            .into());
        }

        if tracing::enabled!(Level::TRACE) {
            trace!("Parsing:\n{}", strings::with_line_numbers(text));
        }

        let mut pairs = grammar.parse(rules::START, text).map_err(syntax_error)?;
        match pairs.next() {
            Some(root) => self.actions.run(root, &mut self.database),
            None => Ok(()),
        }
    }

    /// Snapshot of the database built by the last call.
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    pub fn into_database(self) -> Database {
        self.database
    }
}

impl Default for DbcParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DbcParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbcParser")
            .field("database", &self.database)
            .field("grammar_len", &self.grammar_source.len())
            .finish()
    }
}

fn syntax_error(e: Error<&str>) -> DbcParseError {
    let (line, column) = match e.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };
    DbcParseError::Syntax {
        line,
        column,
        message: e.variant.message().into_owned(),
    }
}
