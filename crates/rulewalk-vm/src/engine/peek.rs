//! Alternative selection by single-token lookahead.
//!
//! The probe walks an alternative left to right until it reaches the first
//! terminal that has a validator, and returns that validator's verdict on the
//! current token. Nested non-terminals are entered through their *first*
//! alternative only, and a walk that runs out of nodes accepts.
//!
//! The probe does not know what the driver has already consumed, so it can
//! accept an alternative whose real continuation would fail, or reject one
//! that only a later alternative of a nested symbol would match. Grammars
//! that need more than that must be written so each alternative starts with a
//! distinguishing terminal.
//!
//! A walk is bounded by its stack depth and by the number of positions it
//! visits, so a rule that re-enters itself without a validator fails with
//! [`ParseError::PeekStackFull`] instead of spinning in place.

use rulewalk_bytecode::{CompiledGrammar, GrammarNode, NodeKind};
use rulewalk_core::{Stack, Token};

use super::context::ParseContext;
use super::error::ParseError;
use super::trace::{NoopTracer, Tracer};

/// Capacity of the probe's position stack.
pub const PEEK_STACK_CAPACITY: usize = 64;

/// A position inside one alternative: rule index and node index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeekFrame {
    pub rule: usize,
    pub node: usize,
}

type PeekStack = Stack<PeekFrame, PEEK_STACK_CAPACITY>;

/// Would alternative `rule` plausibly start with `token`?
pub fn try_peek<C>(ctx: &C, token: &Token, rule: usize) -> Result<bool, ParseError>
where
    C: ParseContext + ?Sized,
{
    let grammar = ctx.grammar();
    let mut stack = PeekStack::new();
    enter(grammar, &mut stack, rule)?;

    let mut budget = PEEK_STACK_CAPACITY * grammar.nodes.len().max(1);
    while let Ok(frame) = stack.pop() {
        if budget == 0 {
            return Err(peek_stack_full());
        }
        budget -= 1;

        let end = grammar
            .rule(frame.rule)
            .ok_or(ParseError::InvalidRule { rule: frame.rule })?
            .end as usize;
        let node = grammar
            .nodes
            .get(frame.node)
            .ok_or(ParseError::InvalidRule { rule: frame.rule })?;

        if frame.node + 1 < end {
            push(
                &mut stack,
                PeekFrame {
                    rule: frame.rule,
                    node: frame.node + 1,
                },
            )?;
        }

        match node.kind() {
            NodeKind::Terminal {
                validator: Some(validator),
                ..
            } => return Ok(ctx.check_validator(token, validator)),
            NodeKind::Terminal { validator: None, .. } => {}
            NodeKind::NonTerminal { rules_begin, .. } => {
                enter(grammar, &mut stack, rules_begin as usize)?;
            }
        }
    }

    Ok(true)
}

/// Pick the alternative of non-terminal `node` to expand at `token`.
///
/// A symbol with a single alternative is chosen without probing.
pub fn find_rule<C>(ctx: &C, token: &Token, node: &GrammarNode) -> Result<usize, ParseError>
where
    C: ParseContext + ?Sized,
{
    find_rule_traced(ctx, token, node, &mut NoopTracer)
}

pub(crate) fn find_rule_traced<C, T>(
    ctx: &C,
    token: &Token,
    node: &GrammarNode,
    tracer: &mut T,
) -> Result<usize, ParseError>
where
    C: ParseContext + ?Sized,
    T: Tracer,
{
    let rules = node.rules().unwrap_or_default();
    if rules.len() == 1 {
        return Ok(rules.start);
    }

    let mut found = None;
    for rule in rules {
        let accepted = try_peek(ctx, token, rule)?;
        tracer.trace_peek(rule, accepted);
        if !accepted {
            continue;
        }
        if let Some(first) = found {
            return Err(ParseError::AmbiguousRule {
                symbol: node.label(),
                token: *token,
                first,
                second: rule,
            });
        }
        found = Some(rule);
    }

    found.ok_or(ParseError::NoMatchingRule {
        symbol: node.label(),
        token: *token,
    })
}

/// Queue the first position of `rule`. Empty alternatives queue nothing.
fn enter(grammar: &CompiledGrammar, stack: &mut PeekStack, rule: usize) -> Result<(), ParseError> {
    let r = grammar
        .rule(rule)
        .ok_or(ParseError::InvalidRule { rule })?;
    if r.is_empty() {
        return Ok(());
    }
    push(
        stack,
        PeekFrame {
            rule,
            node: r.begin as usize,
        },
    )
}

fn push(stack: &mut PeekStack, frame: PeekFrame) -> Result<(), ParseError> {
    stack.push(frame).map_err(|_| peek_stack_full())
}

fn peek_stack_full() -> ParseError {
    ParseError::PeekStackFull {
        capacity: PEEK_STACK_CAPACITY,
    }
}
