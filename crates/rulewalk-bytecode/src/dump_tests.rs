use std::num::NonZeroU16;

use rulewalk_core::Colors;

use crate::{CompiledGrammar, GrammarNode, GrammarRule, RuleName, dump};

fn rule(name: &str, begin: u32, end: u32) -> GrammarRule {
    GrammarRule::new(RuleName::new(name).unwrap(), begin, end)
}

#[test]
fn dump_lists_rules_then_nodes() {
    let grammar = CompiledGrammar {
        rules: vec![rule("Expr", 0, 2), rule("Expr", 2, 3), rule("Term", 3, 4)],
        nodes: vec![
            GrammarNode::non_terminal(2..3)
                .unwrap()
                .with_text("Term")
                .unwrap(),
            GrammarNode::terminal(NonZeroU16::new(1), None)
                .unwrap()
                .with_text("PLUS>")
                .unwrap(),
            GrammarNode::terminal(None, None)
                .unwrap()
                .with_text(">")
                .unwrap(),
            GrammarNode::terminal(NonZeroU16::new(2), NonZeroU16::new(3))
                .unwrap()
                .with_text("NUM>PUSH")
                .unwrap(),
        ],
    };

    insta::assert_snapshot!(dump(&grammar, Colors::OFF), @r"
    rules
      0 Expr n0..2
      1 Expr n2..3
      2 Term n3..4
    nodes
      0 Term r2..3
      1 PLUS> v1 a-
      2 > v- a-
      3 NUM>PUSH v2 a3
    ");
}

#[test]
fn dump_pads_indices() {
    let nodes = (0..11)
        .map(|_| GrammarNode::terminal(None, None).unwrap())
        .collect::<Vec<_>>();
    let grammar = CompiledGrammar {
        rules: vec![rule("S", 0, 11)],
        nodes,
    };

    let out = dump(&grammar, Colors::OFF);
    assert!(out.contains("\n   0  v- a-\n"));
    assert!(out.contains("\n  10  v- a-\n"));
}

#[test]
fn dump_with_colors_wraps_names() {
    let grammar = CompiledGrammar {
        rules: vec![rule("S", 0, 0)],
        nodes: Vec::new(),
    };
    let out = dump(&grammar, Colors::ON);
    assert!(out.contains("\x1b[34mS\x1b[0m"));
}
