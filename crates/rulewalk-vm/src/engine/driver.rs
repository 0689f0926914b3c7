//! The parsing loop.
//!
//! The stack holds the grammar nodes still to be matched, top first. It is
//! seeded with the end node and the start node; popping a terminal matches
//! (or merely acts on) the current token, popping a non-terminal replaces it
//! with the nodes of the alternative chosen by lookahead. The parse succeeds
//! when the stack empties; tokens left unread are not an error.
//!
//! Only nodes that need a token read one: a terminal with neither validator
//! nor actor is a placeholder and can be popped after `EndOfData` has been
//! consumed.
//!
//! Expanding more than [`PARSE_STACK_CAPACITY`] non-terminals without
//! consuming a token fails with [`ParseError::StackFull`], so recursion that
//! never reaches a terminal cannot loop forever even when the stack stays flat.

use rulewalk_bytecode::{GrammarNode, NodeKind};
use rulewalk_core::{Stack, Token, TokenKind};

use super::context::ParseContext;
use super::error::ParseError;
use super::peek::find_rule_traced;
use super::trace::{NoopTracer, Tracer};

/// Capacity of the driver's node stack.
pub const PARSE_STACK_CAPACITY: usize = 256;

type ParseStack = Stack<GrammarNode, PARSE_STACK_CAPACITY>;

/// Parse `tokens`, which must end with an `EndOfData` token.
pub fn parse<C>(ctx: &mut C, tokens: &[Token]) -> Result<(), ParseError>
where
    C: ParseContext + ?Sized,
{
    parse_with(ctx, tokens, &mut NoopTracer)
}

/// [`parse`] with execution tracing.
pub fn parse_with<C, T>(ctx: &mut C, tokens: &[Token], tracer: &mut T) -> Result<(), ParseError>
where
    C: ParseContext + ?Sized,
    T: Tracer,
{
    let result = run(ctx, tokens, tracer);
    tracer.trace_finish(&result);
    result
}

fn run<C, T>(ctx: &mut C, tokens: &[Token], tracer: &mut T) -> Result<(), ParseError>
where
    C: ParseContext + ?Sized,
    T: Tracer,
{
    let Some(last) = tokens.last() else {
        return Err(ParseError::EmptyInput);
    };
    if last.kind != TokenKind::EndOfData {
        return Err(ParseError::MissingEndOfData);
    }

    let start = ctx.start_node();
    let mut stack = ParseStack::new();
    push(&mut stack, ctx.end_node())?;
    push(&mut stack, start)?;

    ctx.begin_parsing();
    tracer.trace_begin(&start);

    let token_at = |cursor: usize| {
        tokens
            .get(cursor)
            .copied()
            .ok_or(ParseError::InputExhausted)
    };

    let mut cursor = 0;
    // Non-terminals expanded since the cursor last moved.
    let mut expansions = 0;
    while let Ok(node) = stack.pop() {
        tracer.trace_node(&node);

        match node.kind() {
            NodeKind::Terminal {
                validator: None,
                actor: None,
            } => {}
            NodeKind::Terminal { validator, actor } => {
                let token = token_at(cursor)?;
                if let Some(validator) = validator {
                    let accepted = ctx.check_validator(&token, validator);
                    tracer.trace_validator(&node, &token, accepted);
                    if !accepted {
                        return Err(ParseError::ValidatorRejected {
                            node: node.label(),
                            token,
                        });
                    }
                    cursor += 1;
                    expansions = 0;
                }
                // Actors see the token their node matched, not the next one.
                if let Some(actor) = actor {
                    let ok = ctx.run_actor(&token, actor);
                    tracer.trace_actor(&node, &token, ok);
                    if !ok {
                        return Err(ParseError::ActorFailed {
                            node: node.label(),
                            token,
                        });
                    }
                }
            }
            NodeKind::NonTerminal { .. } => {
                expansions += 1;
                if expansions > PARSE_STACK_CAPACITY {
                    return Err(stack_full());
                }
                let token = token_at(cursor)?;
                let rule = find_rule_traced(&*ctx, &token, &node, tracer)?;
                let grammar = ctx.grammar();
                let nodes = grammar
                    .rule_nodes(rule)
                    .ok_or(ParseError::InvalidRule { rule })?;
                tracer.trace_expand(&node, rule, nodes);
                for &child in nodes.iter().rev() {
                    push(&mut stack, child)?;
                }
            }
        }
    }

    Ok(())
}

fn push(stack: &mut ParseStack, node: GrammarNode) -> Result<(), ParseError> {
    stack.push(node).map_err(|_| stack_full())
}

fn stack_full() -> ParseError {
    ParseError::StackFull {
        capacity: PARSE_STACK_CAPACITY,
    }
}
