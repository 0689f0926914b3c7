use std::num::NonZeroU16;

use crate::{CompiledGrammar, GrammarError, GrammarNode, GrammarRule, MAGIC, RuleName, VERSION};

fn sample() -> CompiledGrammar {
    let num = GrammarNode::terminal(NonZeroU16::new(1), NonZeroU16::new(2))
        .unwrap()
        .with_text("NUM>PUSH")
        .unwrap();
    let term = GrammarNode::non_terminal(1..2)
        .unwrap()
        .with_text("Term")
        .unwrap();
    CompiledGrammar {
        rules: vec![
            GrammarRule::new(RuleName::new("Expr").unwrap(), 0, 1),
            GrammarRule::new(RuleName::new("Term").unwrap(), 1, 2),
        ],
        nodes: vec![term, num],
    }
}

#[test]
fn roundtrip() {
    let grammar = sample();
    let bytes = grammar.to_binary();
    let decoded = CompiledGrammar::from_binary(&bytes).unwrap();
    assert_eq!(decoded, grammar);
    assert_eq!(decoded.nodes[1].text(), "NUM>PUSH");
}

#[test]
fn header_layout() {
    let bytes = sample().to_binary();
    assert_eq!(&bytes[..4], &MAGIC);
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), VERSION);
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = sample().to_binary();
    bytes[0] = b'X';
    assert_eq!(
        CompiledGrammar::from_binary(&bytes),
        Err(GrammarError::InvalidMagic)
    );
    assert_eq!(
        CompiledGrammar::from_binary(b"RW"),
        Err(GrammarError::InvalidMagic)
    );
}

#[test]
fn rejects_unknown_version() {
    let mut bytes = sample().to_binary();
    bytes[4] = 9;
    assert_eq!(
        CompiledGrammar::from_binary(&bytes),
        Err(GrammarError::UnsupportedVersion(9))
    );
}

#[test]
fn rejects_trailing_bytes() {
    let mut bytes = sample().to_binary();
    bytes.extend_from_slice(&[0, 0]);
    assert_eq!(
        CompiledGrammar::from_binary(&bytes),
        Err(GrammarError::TrailingBytes(2))
    );
}

#[test]
fn rejects_truncated_tables() {
    let bytes = sample().to_binary();
    let truncated = &bytes[..bytes.len() - 3];
    assert!(matches!(
        CompiledGrammar::from_binary(truncated),
        Err(GrammarError::Binary(_))
    ));
}

#[test]
fn loading_verifies_invariants() {
    let mut grammar = sample();
    grammar.rules[1].end = 7;
    let bytes = grammar.to_binary();
    assert!(matches!(
        CompiledGrammar::from_binary(&bytes),
        Err(GrammarError::NodeRangeOutOfBounds { rule: 1, .. })
    ));
}
