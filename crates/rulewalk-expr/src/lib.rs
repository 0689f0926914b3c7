//! The rulewalk expression language.
//!
//! - [`tokenize`] / [`Tokens`]: arithmetic, comparison and logical expressions
//!   to [`Token`](rulewalk_core::Token)s for the driver
//! - [`ParseNode`] / [`ParseNodeType`]: postfix node model for expression
//!   evaluation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod lexer;
pub mod node;


pub use lexer::{Tokens, find_exponent_end, find_number_end, tokenize};
pub use node::{ParseNode, ParseNodeType};
