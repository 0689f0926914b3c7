//! Parsing engine: context seam, driver, lookahead probe and tracing.

mod context;
mod driver;
mod error;
mod peek;
mod trace;

#[cfg(test)]
mod test_utils;

pub use context::ParseContext;
pub use driver::{PARSE_STACK_CAPACITY, parse, parse_with};
pub use error::ParseError;
pub use peek::{PEEK_STACK_CAPACITY, PeekFrame, find_rule, try_peek};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
