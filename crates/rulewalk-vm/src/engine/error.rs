//! Errors that can occur while parsing.

use rulewalk_bytecode::NodeText;
use rulewalk_core::Token;

/// Why a parse stopped. Nodes are identified by their grammar-text word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no tokens to parse")]
    EmptyInput,

    #[error("token stream does not end with EndOfData")]
    MissingEndOfData,

    /// The grammar consumed `EndOfData` before the end node was reached.
    #[error("ran past the end of the token stream")]
    InputExhausted,

    #[error("failed validator `{node}` at {token}")]
    ValidatorRejected { node: NodeText, token: Token },

    #[error("action `{node}` failed at {token}")]
    ActorFailed { node: NodeText, token: Token },

    #[error("no matching rule for `{symbol}` at {token}")]
    NoMatchingRule { symbol: NodeText, token: Token },

    /// Lookahead accepted more than one alternative.
    #[error("ambiguous rule `{symbol}` at {token}: alternatives {first} and {second} both match")]
    AmbiguousRule {
        symbol: NodeText,
        token: Token,
        first: usize,
        second: usize,
    },

    #[error("rule {rule} is outside the grammar")]
    InvalidRule { rule: usize },

    /// Usually unbounded (left) recursion in the grammar.
    #[error("parse stack overflow (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("lookahead stack overflow (capacity {capacity})")]
    PeekStackFull { capacity: usize },
}

impl ParseError {
    /// True for errors caused by a bounded stack rather than by the input.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(
            self,
            ParseError::StackFull { .. } | ParseError::PeekStackFull { .. }
        )
    }
}
