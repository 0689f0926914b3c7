//! Lexer for the expression language.
//!
//! Produces span-based tokens; text is sliced from the source only when
//! needed. The token sequence always ends with exactly one `EndOfData` or
//! `Error` token: lexing stops at the first error.
//!
//! Fixed tokens, keywords and identifiers are recognized by Logos. A number
//! is matched on its first character and extended by [`find_number_end`],
//! which also decides whether it is well formed.
//!
//! Offsets are `u32`. Positions past `u32::MAX` are clamped to it, so
//! expressions longer than 4 GiB do not get meaningful spans.

use std::ops::Range;

use logos::Logos;
use rulewalk_core::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum Lexeme {
    #[token("+")]
    Plus,

    #[token("-")]
    Hyphen,

    #[token("*")]
    Asterisk,

    #[token("/")]
    Slash,

    #[token(",")]
    Comma,

    #[token("$")]
    DollarSign,

    #[token("(")]
    LeftParenthesis,

    #[token(")")]
    RightParenthesis,

    #[token("[")]
    LeftBracket,

    #[token("]")]
    RightBracket,

    #[token("=")]
    Equals,

    #[token("<>")]
    NotEquals,

    #[token("<")]
    LessThan,

    #[token("<=")]
    LessOrEqual,

    #[token(">")]
    GreaterThan,

    #[token(">=")]
    GreaterOrEqual,

    // Keywords only match whole words; `android` is an identifier.
    #[token("and")]
    KeywordAnd,

    #[token("or")]
    KeywordOr,

    #[token("not")]
    KeywordNot,

    #[token("true")]
    KeywordTrue,

    #[token("false")]
    KeywordFalse,

    #[regex(r"[A-Za-z_%][A-Za-z0-9_%.]*")]
    Identifier,

    #[regex(r"[0-9.]", number)]
    Number,
}

impl Lexeme {
    fn kind(self) -> TokenKind {
        match self {
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Hyphen => TokenKind::Hyphen,
            Lexeme::Asterisk => TokenKind::Asterisk,
            Lexeme::Slash => TokenKind::Slash,
            Lexeme::Comma => TokenKind::Comma,
            Lexeme::DollarSign => TokenKind::DollarSign,
            Lexeme::LeftParenthesis => TokenKind::LeftParenthesis,
            Lexeme::RightParenthesis => TokenKind::RightParenthesis,
            Lexeme::LeftBracket => TokenKind::LeftBracket,
            Lexeme::RightBracket => TokenKind::RightBracket,
            Lexeme::Equals => TokenKind::Equals,
            Lexeme::NotEquals => TokenKind::NotEquals,
            Lexeme::LessThan => TokenKind::LessThan,
            Lexeme::LessOrEqual => TokenKind::LessOrEqual,
            Lexeme::GreaterThan => TokenKind::GreaterThan,
            Lexeme::GreaterOrEqual => TokenKind::GreaterOrEqual,
            Lexeme::KeywordAnd => TokenKind::KeywordAnd,
            Lexeme::KeywordOr => TokenKind::KeywordOr,
            Lexeme::KeywordNot => TokenKind::KeywordNot,
            Lexeme::KeywordTrue => TokenKind::KeywordTrue,
            Lexeme::KeywordFalse => TokenKind::KeywordFalse,
            Lexeme::Identifier => TokenKind::Identifier,
            Lexeme::Number => TokenKind::Number,
        }
    }
}

/// Extends a one-character number match to the full literal.
fn number(lex: &mut logos::Lexer<'_, Lexeme>) -> bool {
    let span = lex.span();
    let (end, ok) = find_number_end(lex.source(), span.start);
    lex.bump(end - span.end);
    ok
}

/// Lazy token stream over an expression. Fused after the final token.
pub struct Tokens<'s> {
    source: &'s str,
    lexer: logos::Lexer<'s, Lexeme>,
    done: bool,
}

impl<'s> Tokens<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            lexer: Lexeme::lexer(source),
            done: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let last = match self.lexer.next() {
            Some(Ok(lexeme)) => return Some(span_token(lexeme.kind(), self.lexer.span())),
            Some(Err(())) => {
                let start = self.lexer.span().start;
                span_token(TokenKind::Error, start..error_end(self.source, start))
            }
            None => {
                let end = self.source.len();
                span_token(TokenKind::EndOfData, end..end)
            }
        };
        self.done = true;
        Some(last)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenizes a whole expression.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Tokens::new(expression).collect()
}

/// End of a number starting at `start`, and whether it is well formed.
///
/// Accepts digits with at most one `.`; `e` or `E` hands over to
/// [`find_exponent_end`]. A second `.` or a letter makes the rest of the word
/// one malformed literal. A literal without digits (`.`) is malformed.
pub fn find_number_end(text: &str, start: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    let mut has_digits = false;
    let mut has_decimal = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'0'..=b'9' => has_digits = true,
            b'.' if !has_decimal => has_decimal = true,
            b'e' | b'E' => return find_exponent_end(text, i + 1),
            b'.' => return (word_end(bytes, i), false),
            b if b.is_ascii_alphabetic() => return (word_end(bytes, i), false),
            _ => return (i, has_digits),
        }
    }
    (bytes.len(), has_digits)
}

/// End of an exponent starting at `start` (just after the `e`): an optional
/// sign, then digits. Well formed only with at least one digit.
pub fn find_exponent_end(text: &str, start: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    if start >= bytes.len() {
        return (bytes.len(), false);
    }
    let digits = match bytes[start] {
        b'+' | b'-' => start + 1,
        _ => start,
    };
    let end = bytes[digits..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| digits + n);
    (end, end > digits)
}

fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'%' | b'.')
}

fn word_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !is_word_continue(b))
        .map_or(bytes.len(), |n| start + n)
}

/// End of the error token at `start`: a malformed number, else one character.
fn error_end(source: &str, start: usize) -> usize {
    match source[start..].chars().next() {
        Some('0'..='9' | '.') => find_number_end(source, start).0,
        Some(c) => start + c.len_utf8(),
        None => start,
    }
}

pub(crate) fn span_token(kind: TokenKind, span: Range<usize>) -> Token {
    let start = offset(span.start);
    Token::new(kind, start, offset(span.end).saturating_sub(start))
}

fn offset(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}
