use std::num::NonZeroU16;

use crate::{GrammarError, GrammarNode, NodeKind, TERMINAL_BIT};

fn id(n: u16) -> Option<NonZeroU16> {
    NonZeroU16::new(n)
}

#[test]
fn terminal_accessors() {
    let node = GrammarNode::terminal(id(5), id(7)).unwrap();
    assert!(node.is_terminal());
    assert_eq!(node.validator(), id(5));
    assert_eq!(node.actor(), id(7));
    assert_eq!(node.rules(), None);
}

#[test]
fn non_terminal_accessors() {
    let node = GrammarNode::non_terminal(2..4).unwrap();
    assert!(!node.is_terminal());
    assert_eq!(node.rules(), Some(2..4));
    assert_eq!(node.validator(), None);
    assert_eq!(node.actor(), None);
}

#[test]
fn default_is_placeholder_terminal() {
    let node = GrammarNode::default();
    assert_eq!(
        node.kind(),
        NodeKind::Terminal {
            validator: None,
            actor: None
        }
    );
    assert_eq!(node.text(), "");
}

#[test]
fn validator_over_15_bits_is_rejected() {
    let err = GrammarNode::terminal(id(0x8000), None).unwrap_err();
    assert_eq!(
        err,
        GrammarError::IndexOverflow {
            what: "validator",
            index: 0x8000
        }
    );
}

#[test]
fn actor_uses_full_16_bits() {
    let node = GrammarNode::terminal(None, id(0xFFFF)).unwrap();
    assert_eq!(node.actor(), id(0xFFFF));
}

#[test]
fn rule_range_over_15_bits_is_rejected() {
    assert!(GrammarNode::non_terminal(0x7FFE..0x7FFF).is_ok());
    let err = GrammarNode::non_terminal(0..0x8000).unwrap_err();
    assert_eq!(err.to_string(), "rules_end index 32768 exceeds the 15-bit limit");
}

#[test]
fn text_over_capacity_is_rejected() {
    let node = GrammarNode::terminal(None, None).unwrap();
    let long = "X".repeat(29);
    assert!(matches!(node.with_text(&long), Err(GrammarError::Text(_))));
}

#[test]
fn pack_terminal_layout() {
    let node = GrammarNode::terminal(id(5), id(7)).unwrap();
    assert_eq!(node.pack(), TERMINAL_BIT | (5 << 16) | 7);

    let placeholder = GrammarNode::terminal(None, None).unwrap();
    assert_eq!(placeholder.pack(), TERMINAL_BIT);
}

#[test]
fn pack_non_terminal_layout() {
    let node = GrammarNode::non_terminal(3..9).unwrap();
    assert_eq!(node.pack(), (3 << 16) | 9);
}

#[test]
fn unpack_restores_kind() {
    let terminal = GrammarNode::terminal(id(0x7FFF), id(0xFFFF)).unwrap();
    assert_eq!(GrammarNode::unpack(terminal.pack()).unwrap(), terminal);

    let non_terminal = GrammarNode::non_terminal(1..2).unwrap();
    assert_eq!(GrammarNode::unpack(non_terminal.pack()).unwrap(), non_terminal);
}

#[test]
fn unpack_rejects_oversized_rule_end() {
    assert!(GrammarNode::unpack(0x0000_8000).is_err());
}
