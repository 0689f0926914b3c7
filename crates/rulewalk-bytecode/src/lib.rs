//! Compiled grammar tables for rulewalk.
//!
//! This crate contains:
//! - [`GrammarNode`]: terminal / non-terminal symbol with its 15-bit index budget
//! - [`GrammarRule`]: one alternative production, a range into the node table
//! - [`CompiledGrammar`]: the rule and node tables shared by every parse
//! - A postcard-based binary format and a human-readable [`dump`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod binary;
mod dump;
mod error;
mod grammar;
mod node;
mod verify;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod node_tests;

pub use binary::{MAGIC, VERSION};
pub use dump::dump;
pub use error::GrammarError;
pub use grammar::{CompiledGrammar, GrammarRule, RuleName};
pub use node::{GrammarNode, MAX_INDEX, NodeKind, NodeText, TERMINAL_BIT};
