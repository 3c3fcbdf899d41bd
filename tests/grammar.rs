use candb::dbc::grammar::{DBC_GRAMMAR, Grammar};
use candb::GrammarError;

const NS_GRAMMAR: &str = r#"
ns_file     = { SOI ~ symbols ~ EOI }
symbols     = ${ "NS_" ~ s* ~ ":" ~ s* ~ NEWLINE ~ (symbol_name ~ NEWLINE)* ~ NEWLINE* }
symbol_name = ${ "  " ~ TOKEN }
s           = _{ " " | "\t" }
TOKEN       = @{ (ASCII_ALPHANUMERIC | "_" | "'")+ }
"#;

const MESSAGE_GRAMMAR: &str = r#"
messages = { SOI ~ message* ~ EOI }
message  = { "BO_" ~ number ~ TOKEN ~ ":" ~ number ~ TOKEN ~ signal* }
signal   = {
    "SG_" ~ TOKEN ~ ":" ~ number ~ "|" ~ number ~ "@" ~ number ~ sign
  ~ "(" ~ number ~ "," ~ number ~ ")" ~ "[" ~ number ~ "|" ~ number ~ "]" ~ phrase ~ TOKEN
}

WHITESPACE = _{ " " | "\t" | NEWLINE }
TOKEN      = @{ (ASCII_ALPHANUMERIC | "_" | "'")+ }
sign       = @{ ("+" | "-")? }
number     = @{ ("+" | "-")? ~ ASCII_DIGIT+ }
phrase     = @{ "\"" ~ (!"\"" ~ ANY)* ~ "\"" }
"#;

fn count(grammar: &Grammar, start: &str, text: &str, rule: &str) -> Option<usize> {
    let pairs = grammar.parse(start, text).ok()?;
    Some(pairs.flatten().filter(|p| p.as_rule() == rule).count())
}

#[test]
fn test_ns_grammar() {
    let grammar: Grammar = Grammar::load(NS_GRAMMAR).unwrap();

    assert_eq!(count(&grammar, "ns_file", "NS_: \n\n\n", "symbol_name"), Some(0));
    assert_eq!(count(&grammar, "ns_file", "NS_: \n  NS_DESC\n\n\n", "symbol_name"), Some(1));
    assert_eq!(
        count(&grammar, "ns_file", "NS_: \n  NS_DESC\n  NS_DESC2\n\n\n", "symbol_name"),
        Some(2)
    );
    assert_eq!(count(&grammar, "ns_file", "NS_ NS_DESC\n", "symbol_name"), None);
}

#[test]
fn test_simple_message_grammar() {
    let grammar: Grammar = Grammar::load(MESSAGE_GRAMMAR).unwrap();
    let text: &str = r#"BO_ 257 GTW_epasControl: 3 NEO
  SG_ GTW_epasControlChecksum : 16|8@1+ (1,0) [0|255] "" NEO
  SG_ GTW_epasControlChecksum : 16|8@1+ (1,0) [0|255] "" NEO
  SG_ GTW_epasEmergencyOn : 0|1@1+ (1,0) [2|-1] "" NEO

BO_ 257 GTW_epasControl: 3 NEO
  SG_ GTW_epasControlChecksum : 16|8@1+ (1,0) [0|255] "" NEO"#;

    assert_eq!(count(&grammar, "messages", text, "message"), Some(2));
    assert_eq!(count(&grammar, "messages", text, "signal"), Some(4));
}

#[test]
fn test_builtin_grammar_source() {
    let grammar: Grammar = Grammar::load(DBC_GRAMMAR).unwrap();
    assert!(grammar.has_rule("dbc"));
    assert!(grammar.rule_names().any(|r| r == "signal"));
    assert!(!grammar.has_rule("grammar"));
}

#[test]
fn test_grammar_errors() {
    assert!(matches!(Grammar::load(""), Err(GrammarError::Load { .. })));
    assert!(matches!(Grammar::load("a = { b }"), Err(GrammarError::Load { .. })));
    assert!(matches!(Grammar::load("a = { \"x\" "), Err(GrammarError::Load { .. })));
}
