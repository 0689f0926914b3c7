//! Errors raised while building, verifying or loading grammar tables.

use rulewalk_core::CapacityError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrammarError {
    /// An index does not fit the 15-bit budget of a packed node.
    #[error("{what} index {index} exceeds the 15-bit limit")]
    IndexOverflow { what: &'static str, index: usize },

    /// Symbol text does not fit its inline buffer.
    #[error("symbol text too long: {0}")]
    Text(#[from] CapacityError),

    #[error("node {node} has an empty rule range {begin}..{end}")]
    EmptyRuleRange { node: usize, begin: usize, end: usize },

    #[error("node {node} references rules up to {end}, but there are only {rules}")]
    RuleRangeOutOfBounds { node: usize, end: usize, rules: usize },

    #[error("node {node} (`{expected}`) references rule {rule} named `{found}`")]
    RuleNameMismatch {
        node: usize,
        rule: usize,
        expected: String,
        found: String,
    },

    #[error("rule {rule} has an inverted node range {begin}..{end}")]
    InvertedNodeRange { rule: usize, begin: u32, end: u32 },

    #[error("rule {rule} references nodes up to {end}, but there are only {nodes}")]
    NodeRangeOutOfBounds { rule: usize, end: u32, nodes: usize },

    #[error("rules {first} and {second} share nodes")]
    OverlappingRules { first: usize, second: usize },

    #[error("rule {index} is out of name order")]
    UnsortedRules { index: usize },

    #[error("invalid magic: expected RWGR")]
    InvalidMagic,

    #[error("unsupported grammar format version {0}")]
    UnsupportedVersion(u16),

    #[error("{0} trailing bytes after grammar tables")]
    TrailingBytes(usize),

    #[error("binary decode error: {0}")]
    Binary(postcard::Error),
}
