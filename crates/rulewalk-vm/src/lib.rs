//! Runtime driver for compiled rulewalk grammars.
//!
//! The driver walks a [`CompiledGrammar`](rulewalk_bytecode::CompiledGrammar)
//! with an explicit bounded stack, choosing between alternatives with a
//! single-token lookahead probe, and calls back into a caller-owned
//! [`ParseContext`] for validation and actions.

pub mod engine;

pub use engine::{
    NoopTracer, PARSE_STACK_CAPACITY, PEEK_STACK_CAPACITY, ParseContext, ParseError, PeekFrame,
    PrintTracer, Tracer, Verbosity, find_rule, parse, parse_with, try_peek,
};
