use std::num::NonZeroU16;

use indoc::indoc;
use rulewalk_bytecode::{GrammarError, NodeKind, dump};
use rulewalk_core::Colors;

use crate::{Error, GrammarSize, NameLocator, compile, grammar_size, make_node};

const EXPR: &str = indoc! {"
    # additive expressions
    Expr= Term ExprTail
    ExprTail= PLUS>ADD Term ExprTail
            | >
    Term= NUM>PUSH
"};

fn locator() -> NameLocator {
    NameLocator::new()
        .validator("PLUS")
        .validator("NUM")
        .actor("ADD")
        .actor("PUSH")
}

fn id(n: u16) -> Option<NonZeroU16> {
    NonZeroU16::new(n)
}

#[test]
fn compiles_expression_grammar() {
    let grammar = compile(&locator(), EXPR).unwrap();

    insta::assert_snapshot!(dump(&grammar, Colors::OFF), @r"
    rules
      0 Expr n0..2
      1 ExprTail n2..5
      2 ExprTail n5..6
      3 Term n6..7
    nodes
      0 Term r3..4
      1 ExprTail r1..3
      2 PLUS>ADD v1 a1
      3 Term r3..4
      4 ExprTail r1..3
      5 > v- a-
      6 NUM>PUSH v2 a2
    ");
    assert_eq!(grammar.verify(), Ok(()));
}

#[test]
fn sizing_agrees_with_emission() {
    let size = grammar_size(EXPR);
    assert_eq!(size, GrammarSize { rules: 4, nodes: 7 });

    let grammar = compile(&locator(), EXPR).unwrap();
    assert_eq!(grammar.rules.len(), size.rules);
    assert_eq!(grammar.nodes.len(), size.nodes);
}

#[test]
fn alternatives_partition_nodes() {
    let locator = NameLocator::new().validator("x").validator("y").validator("z");
    let grammar = compile(&locator, "A= x> | y> z>").unwrap();

    assert_eq!(grammar.rules.len(), 2);
    assert_eq!(grammar.rules[0].node_range(), 0..1);
    assert_eq!(grammar.rules[1].node_range(), 1..3);
    assert_eq!(grammar.find_rules("A"), 0..2);
}

#[test]
fn sort_is_stable_and_groups_names() {
    let text = "B= A | >  A= >  B= A";
    let grammar = compile(&NameLocator::new(), text).unwrap();

    let names: Vec<&str> = grammar.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "B", "B"]);
    // B alternatives keep source order.
    let begins: Vec<u32> = grammar.rules[1..].iter().map(|r| r.begin).collect();
    assert_eq!(begins, [0, 1, 3]);
    assert_eq!(grammar.nodes[0].rules(), Some(0..1));
}

#[test]
fn terminal_with_both_names() {
    let locator = (0..4).fold(NameLocator::new(), |l, i| l.validator(format!("v{i}")));
    let locator = (0..6).fold(locator.validator("VALID"), |l, i| l.actor(format!("a{i}")));
    let locator = locator.actor("ACT");

    let node = make_node(&locator, "VALID>ACT").unwrap();
    assert_eq!(
        node.kind(),
        NodeKind::Terminal {
            validator: id(5),
            actor: id(7),
        }
    );
    assert_eq!(node.text(), "VALID>ACT");
}

#[test]
fn bare_arrow_is_empty_terminal() {
    let node = make_node(&NameLocator::new(), ">").unwrap();
    assert_eq!(
        node.kind(),
        NodeKind::Terminal {
            validator: None,
            actor: None,
        }
    );
}

#[test]
fn one_sided_terminals() {
    let locator = locator();
    let node = make_node(&locator, "NUM>").unwrap();
    assert_eq!(node.validator(), id(2));
    assert_eq!(node.actor(), None);

    let node = make_node(&locator, ">PUSH").unwrap();
    assert_eq!(node.validator(), None);
    assert_eq!(node.actor(), id(2));
}

#[test]
fn only_first_arrow_splits() {
    let locator = NameLocator::new().validator("A").actor("B>C");
    let node = make_node(&locator, "A>B>C").unwrap();
    assert_eq!(node.validator(), id(1));
    assert_eq!(node.actor(), id(1));
}

#[test]
fn word_without_arrow_is_unresolved_non_terminal() {
    let node = make_node(&NameLocator::new(), "Expr").unwrap();
    assert_eq!(node.rules(), Some(0..0));
    assert_eq!(node.text(), "Expr");
}

#[test]
fn equals_takes_precedence_over_arrow() {
    let grammar = compile(&NameLocator::new(), "X>= >").unwrap();
    assert_eq!(grammar.rules[0].name, "X>");
    assert_eq!(grammar.nodes.len(), 1);
}

#[test]
fn unknown_validator() {
    let err = compile(&locator(), "S= NOPE>PUSH").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownValidator {
            name: "NOPE".into()
        }
    );
    assert_eq!(err.to_string(), "unknown validator: NOPE");
}

#[test]
fn unknown_actor() {
    let err = compile(&locator(), "S= NUM>NOPE").unwrap_err();
    assert_eq!(err.to_string(), "unknown actor: NOPE");
}

#[test]
fn unknown_rule() {
    let err = compile(&locator(), "S= Missing").unwrap_err();
    assert_eq!(
        err,
        Error::RuleNotFound {
            name: "Missing".into()
        }
    );
    assert_eq!(err.to_string(), "cannot find rule: Missing");
}

#[test]
fn missing_rule_declaration() {
    let err = compile(&locator(), "  NUM> S= >").unwrap_err();
    assert_eq!(
        err,
        Error::MissingRuleDeclaration {
            word: "NUM>".into(),
            offset: 2
        }
    );

    let err = compile(&locator(), "| S= >").unwrap_err();
    assert!(matches!(err, Error::MissingRuleDeclaration { offset: 0, .. }));
}

#[test]
fn rule_name_over_capacity() {
    let err = compile(&NameLocator::new(), "SeventeenLetters_= >").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidSymbol {
            source: GrammarError::Text(_),
            ..
        }
    ));
}

#[test]
fn node_text_over_capacity() {
    let long = "A".repeat(29);
    let err = make_node(&NameLocator::new(), &long).unwrap_err();
    assert!(matches!(err, Error::InvalidSymbol { .. }));
}

#[test]
fn empty_text_is_empty_grammar() {
    let grammar = compile(&NameLocator::new(), "  # nothing here\n").unwrap();
    assert!(grammar.rules.is_empty());
    assert!(grammar.nodes.is_empty());
}

#[test]
fn empty_alternative() {
    let grammar = compile(&NameLocator::new(), "S= | >").unwrap();
    assert!(grammar.rules[0].is_empty());
    assert_eq!(grammar.rules[1].node_range(), 0..1);
}
