//! A small calculator context shared by the engine tests.

use std::num::NonZeroU16;

use rulewalk_bytecode::{CompiledGrammar, GrammarNode};
use rulewalk_compiler::{GrammarLocator, NameLocator, compile};
use rulewalk_core::{Token, TokenKind};

use super::ParseContext;

/// Sums like `1 + 2 + 3`; `>ADD` folds after each operand.
pub const SUM: &str = "
    Expr= NUM>PUSH Tail
    Tail= PLUS> NUM>PUSH >ADD Tail
        | END>
";

pub struct Calc<'s> {
    pub grammar: CompiledGrammar,
    pub locator: NameLocator,
    pub source: &'s str,
    pub values: Vec<i64>,
    /// Tokens handed to actors, in call order.
    pub actor_tokens: Vec<Token>,
    pub began: usize,
    start: GrammarNode,
    end: GrammarNode,
}

impl<'s> Calc<'s> {
    pub fn new(grammar: &str, start: &str, source: &'s str) -> Self {
        let locator = NameLocator::new()
            .validator("NUM")
            .validator("PLUS")
            .validator("STAR")
            .validator("END")
            .actor("PUSH")
            .actor("ADD")
            .actor("FAIL");
        let grammar = compile(&locator, grammar).unwrap();
        let start = grammar.symbol(start).unwrap();
        let end = GrammarNode::terminal(None, None)
            .unwrap()
            .with_text(">")
            .unwrap();
        Self {
            grammar,
            locator,
            source,
            values: Vec::new(),
            actor_tokens: Vec::new(),
            began: 0,
            start,
            end,
        }
    }

    /// Make the end node consume `EndOfData` itself.
    pub fn with_end_validator(mut self) -> Self {
        self.end = GrammarNode::terminal(self.locator.find_validator("END"), None)
            .unwrap()
            .with_text("END>")
            .unwrap();
        self
    }

    pub fn tokens(&self) -> Vec<Token> {
        lex(self.source)
    }
}

impl ParseContext for Calc<'_> {
    fn grammar(&self) -> &CompiledGrammar {
        &self.grammar
    }

    fn end_node(&self) -> GrammarNode {
        self.end
    }

    fn start_node(&self) -> GrammarNode {
        self.start
    }

    fn begin_parsing(&mut self) {
        self.began += 1;
        self.values.clear();
    }

    fn check_validator(&self, token: &Token, validator: NonZeroU16) -> bool {
        let expected = match self.locator.validator_name(validator) {
            Some("NUM") => TokenKind::Number,
            Some("PLUS") => TokenKind::Plus,
            Some("STAR") => TokenKind::Asterisk,
            Some("END") => TokenKind::EndOfData,
            _ => return false,
        };
        token.kind == expected
    }

    fn run_actor(&mut self, token: &Token, actor: NonZeroU16) -> bool {
        self.actor_tokens.push(*token);
        match self.locator.actor_name(actor) {
            Some("PUSH") => match token.text(self.source).parse() {
                Ok(value) => {
                    self.values.push(value);
                    true
                }
                Err(_) => false,
            },
            Some("ADD") => {
                let (Some(b), Some(a)) = (self.values.pop(), self.values.pop()) else {
                    return false;
                };
                self.values.push(a + b);
                true
            }
            _ => false,
        }
    }
}

/// Digits, `+` and `*`; whitespace is skipped.
pub fn lex(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let kind = match bytes[i] {
            b' ' => {
                i += 1;
                continue;
            }
            b'0'..=b'9' => {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                TokenKind::Number
            }
            b'+' => {
                i += 1;
                TokenKind::Plus
            }
            b'*' => {
                i += 1;
                TokenKind::Asterisk
            }
            other => panic!("unexpected byte {other:?}"),
        };
        tokens.push(Token::new(kind, start as u32, (i - start) as u32));
    }
    tokens.push(Token::new(TokenKind::EndOfData, bytes.len() as u32, 0));
    tokens
}
