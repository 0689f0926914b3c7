//! rulewalk: an embeddable grammar-driven parsing engine.
//!
//! A grammar is compiled from text into rule and node tables once, then
//! driven over token streams by a stack-based LL parser that calls back into
//! a caller-owned [`ParseContext`] to validate tokens and run actions.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroU16;
//!
//! use rulewalk::{CompiledGrammar, GrammarNode, NameLocator, ParseContext, Token, TokenKind};
//!
//! struct Counter {
//!     grammar: CompiledGrammar,
//!     start: GrammarNode,
//!     end: GrammarNode,
//!     numbers: usize,
//! }
//!
//! impl ParseContext for Counter {
//!     fn grammar(&self) -> &CompiledGrammar {
//!         &self.grammar
//!     }
//!
//!     fn end_node(&self) -> GrammarNode {
//!         self.end
//!     }
//!
//!     fn start_node(&self) -> GrammarNode {
//!         self.start
//!     }
//!
//!     fn check_validator(&self, token: &Token, validator: NonZeroU16) -> bool {
//!         let expected = match validator.get() {
//!             1 => TokenKind::Number,
//!             2 => TokenKind::Comma,
//!             _ => TokenKind::EndOfData,
//!         };
//!         token.kind == expected
//!     }
//!
//!     fn run_actor(&mut self, _token: &Token, _actor: NonZeroU16) -> bool {
//!         self.numbers += 1;
//!         true
//!     }
//! }
//!
//! # fn main() -> Result<(), rulewalk::Error> {
//! let locator = NameLocator::new()
//!     .validator("NUM")
//!     .validator("COMMA")
//!     .validator("END")
//!     .actor("COUNT");
//! let grammar = rulewalk::compile(
//!     &locator,
//!     "
//!     List= NUM>COUNT Rest
//!     Rest= COMMA> NUM>COUNT Rest
//!         | END>
//!     ",
//! )?;
//!
//! let mut counter = Counter {
//!     start: grammar.symbol("List").expect("declared above"),
//!     end: GrammarNode::terminal(None, None)?,
//!     grammar,
//!     numbers: 0,
//! };
//! rulewalk::parse_expression(&mut counter, "1, 2, 3")?;
//! assert_eq!(counter.numbers, 3);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]


pub use rulewalk_bytecode as bytecode;
pub use rulewalk_compiler as compiler;
pub use rulewalk_expr as expr;
pub use rulewalk_vm as vm;

pub use rulewalk_bytecode::{CompiledGrammar, GrammarError, GrammarNode, GrammarRule, NodeKind, dump};
pub use rulewalk_compiler::{CompileError, GrammarLocator, NameLocator, compile, grammar_size};
pub use rulewalk_core::{CapacityError, Colors, SmallString, Stack, StackError, Token, TokenKind};
pub use rulewalk_expr::{ParseNode, ParseNodeType, Tokens, tokenize};
pub use rulewalk_vm::{
    NoopTracer, PARSE_STACK_CAPACITY, PEEK_STACK_CAPACITY, ParseContext, ParseError, PrintTracer,
    Tracer, Verbosity, parse, parse_with,
};

/// Errors from any stage: compiling, loading, tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// The expression tokenizer stopped at malformed input.
    #[error("invalid token `{text}` at offset {}", .token.start)]
    InvalidToken { token: Token, text: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for rulewalk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Tokenize an expression and parse it with `ctx`.
pub fn parse_expression<C>(ctx: &mut C, source: &str) -> Result<()>
where
    C: ParseContext + ?Sized,
{
    parse_expression_with(ctx, source, &mut NoopTracer)
}

/// [`parse_expression`] with execution tracing.
pub fn parse_expression_with<C, T>(ctx: &mut C, source: &str, tracer: &mut T) -> Result<()>
where
    C: ParseContext + ?Sized,
    T: Tracer,
{
    let tokens = tokenize(source);
    if let Some(&token) = tokens.last()
        && token.kind == TokenKind::Error
    {
        return Err(Error::InvalidToken {
            token,
            text: token.text(source).to_owned(),
        });
    }
    parse_with(ctx, &tokens, tracer)?;
    Ok(())
}
