//! Postfix parse nodes.
//!
//! A sequence of [`ParseNode`]s in postfix order can be evaluated on a stack
//! machine by visiting the nodes in order. The effect of each node type on
//! the evaluation stack is documented on the variant. Error codes share the
//! type space, numbered from [`ParseNodeType::FIRST_ERROR`] upward.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ParseNodeType {
    /// End of the sequence. One value, the result, remains on the stack.
    Finished = 0,
    /// Pushes a number.
    Number,
    /// Pushes an identifier.
    Identifier,
    /// Pushes `true`.
    LogicalTrue,
    /// Pushes `false`.
    LogicalFalse,

    // Unary prefix operators: replace the top value.
    /// `+x`
    UnaryPlus,
    /// `-x`
    UnaryMinus,
    /// `$x`
    RowLookup,
    /// `not x`
    LogicalNot,

    // Binary operators: pop two values, push the result.
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Two value-yielding operands with no operator between them; a form of
    /// multiplication.
    Concatenation,

    // Logical operators: pop two, push the result. Evaluators may
    // short-circuit them.
    LogicalAnd,
    LogicalOr,

    // Comparisons chain: `a < b < c` means `(a < b) and (b < c)` with `b`
    // evaluated once. Each pops two values, pushes the second back, and
    // folds its verdict into the top of a separate comparison-result stack.
    CompareEqual,
    CompareNotEqual,
    CompareLessThan,
    CompareLessOrEqual,
    CompareGreaterThan,
    CompareGreaterOrEqual,
    /// Starts a chain: pushes `true` onto the comparison-result stack.
    CompareBegin,
    /// Ends a chain: pops the value stack, then moves the top comparison
    /// result onto the value stack.
    CompareEnd,

    /// Pops the invocable, then `aux` arguments, and pushes the result.
    Invoke,

    InvalidToken = 1000,
    NonAssociativeOperator,
    UnexpectedParenthesis,
    UnexpectedBracket,
    UnexpectedSymbol,
    MissingRightParenthesis,
    MissingRightBracket,
}

impl ParseNodeType {
    /// Number of non-error node types, for sizing per-type tables.
    pub const COUNT: usize = ParseNodeType::Invoke as usize + 1;

    /// Smallest error code.
    pub const FIRST_ERROR: u16 = 1000;

    #[inline]
    pub fn is_error(self) -> bool {
        self as u16 >= Self::FIRST_ERROR
    }

    /// Binary operators, logical operators and comparisons.
    pub fn is_binary(self) -> bool {
        use ParseNodeType::*;
        matches!(
            self,
            Addition
                | Subtraction
                | Multiplication
                | Division
                | Concatenation
                | LogicalAnd
                | LogicalOr
        ) || self.is_comparison()
    }

    pub fn is_unary(self) -> bool {
        use ParseNodeType::*;
        matches!(self, UnaryPlus | UnaryMinus | RowLookup | LogicalNot)
    }

    /// The chainable comparisons, not `CompareBegin`/`CompareEnd`.
    pub fn is_comparison(self) -> bool {
        use ParseNodeType::*;
        matches!(
            self,
            CompareEqual
                | CompareNotEqual
                | CompareLessThan
                | CompareLessOrEqual
                | CompareGreaterThan
                | CompareGreaterOrEqual
        )
    }

    /// Net change in evaluation-stack depth, or `None` when it depends on
    /// `aux` (`Invoke`) or the node is an error.
    pub fn stack_effect(self) -> Option<isize> {
        use ParseNodeType::*;
        match self {
            Number | Identifier | LogicalTrue | LogicalFalse => Some(1),
            Finished => Some(0),
            _ if self.is_unary() => Some(0),
            _ if self.is_binary() => Some(-1),
            CompareBegin | CompareEnd => Some(0),
            _ => None,
        }
    }
}

impl fmt::Display for ParseNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One postfix node, referencing the source span it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseNode {
    pub kind: ParseNodeType,
    pub start: u32,
    pub len: u32,
    /// Argument count for `Invoke`; unused otherwise.
    pub aux: u32,
}

impl ParseNode {
    pub fn new(kind: ParseNodeType, start: u32, len: u32) -> Self {
        Self {
            kind,
            start,
            len,
            aux: 0,
        }
    }

    pub fn invoke(start: u32, len: u32, args: u32) -> Self {
        Self {
            kind: ParseNodeType::Invoke,
            start,
            len,
            aux: args,
        }
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        let start = self.start as usize;
        source
            .get(start..start + self.len as usize)
            .unwrap_or_default()
    }
}
