//! Span-based tokens.
//!
//! A token stores its category and the byte span it covers; text is sliced
//! from the source only when needed.

use std::fmt;
use std::ops::Range;

/// Token categories of the expression language.
///
/// `Caret`, `Colon` and the braces belong to the category set even though the
/// current tokenizer never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Special
    EndOfData = 0,
    Error,
    Number,
    Identifier,

    // Operators
    Plus,
    Hyphen,
    Asterisk,
    Slash,
    Caret,
    Comma,
    Colon,
    DollarSign,

    // Grouping
    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    // Comparison
    Equals,
    NotEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,

    // Keywords
    KeywordAnd,
    KeywordOr,
    KeywordNot,
    KeywordTrue,
    KeywordFalse,
}

impl TokenKind {
    /// Number of token kinds, for sizing per-kind tables.
    pub const COUNT: usize = TokenKind::KeywordFalse as usize + 1;

    /// Every kind in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::EndOfData,
        TokenKind::Error,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Plus,
        TokenKind::Hyphen,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Caret,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::DollarSign,
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::LessThan,
        TokenKind::LessOrEqual,
        TokenKind::GreaterThan,
        TokenKind::GreaterOrEqual,
        TokenKind::KeywordAnd,
        TokenKind::KeywordOr,
        TokenKind::KeywordNot,
        TokenKind::KeywordTrue,
        TokenKind::KeywordFalse,
    ];

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordAnd
                | TokenKind::KeywordOr
                | TokenKind::KeywordNot
                | TokenKind::KeywordTrue
                | TokenKind::KeywordFalse
        )
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::LessThan
                | TokenKind::LessOrEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterOrEqual
        )
    }
}

/// Zero-copy token: kind + span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub len: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, start: u32, len: u32) -> Self {
        Self { kind, start, len }
    }

    /// Saturates at `u32::MAX`.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.len)
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// Slice the token's text out of the source it was produced from.
    ///
    /// Returns an empty string if the span does not lie inside `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span()).unwrap_or_default()
    }

    /// True for the kinds that end a token sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfData | TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.kind, self.start, self.end())
    }
}
