//! rulewalk grammar compiler.
//!
//! Turns grammar text into a [`CompiledGrammar`]:
//!
//! ```text
//! Expr= Term ExprTail
//! ExprTail= PLUS>ADD Term ExprTail
//!         | >
//! Term= NUM>PUSH          # terminal: validator>actor
//! ```
//!
//! - `words` - whitespace/comment-delimited word scanning
//! - `compile` - sizing, emission and name-resolution passes
//! - `locator` - validator/actor name lookup
//!
//! [`CompiledGrammar`]: rulewalk_bytecode::CompiledGrammar

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod locator;
pub mod words;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod locator_tests;

use rulewalk_bytecode::GrammarError;

pub use compile::{GrammarSize, compile, grammar_size, make_node, resolve_non_terminals};
pub use locator::{GrammarLocator, NameLocator};
pub use words::{Words, extract_word, skip_space};

/// Errors that abort grammar compilation. No partial grammar is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A symbol or `|` appeared before the first `name=`.
    #[error("grammar must begin with a named rule, found `{word}` at offset {offset}")]
    MissingRuleDeclaration { word: String, offset: usize },

    #[error("unknown validator: {name}")]
    UnknownValidator { name: String },

    #[error("unknown actor: {name}")]
    UnknownActor { name: String },

    /// A non-terminal names a rule that is never declared.
    #[error("cannot find rule: {name}")]
    RuleNotFound { name: String },

    /// A word does not fit its node (name too long, index over 15 bits).
    #[error("invalid symbol `{word}`: {source}")]
    InvalidSymbol {
        word: String,
        #[source]
        source: GrammarError,
    },

    #[error("grammar has {0} nodes, more than a rule range can address")]
    TooManyNodes(usize),
}

/// [`Error`] under a name that reads well next to other crates' errors.
pub type CompileError = Error;

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
