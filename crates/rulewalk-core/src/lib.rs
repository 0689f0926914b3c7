#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core building blocks shared by the rulewalk crates.
//!
//! - [`Stack`]: fixed-capacity LIFO used by the parse driver and lookahead probe
//! - [`SmallString`]: inline, length-checked string for grammar symbol names
//! - [`Token`] / [`TokenKind`]: span-based tokens consumed by the driver
//! - [`Colors`]: ANSI palette for dumps and traces

mod colors;
mod small_string;
mod stack;
mod token;


pub use colors::Colors;
pub use small_string::{CapacityError, SmallString};
pub use stack::{Stack, StackError};
pub use token::{Token, TokenKind};
