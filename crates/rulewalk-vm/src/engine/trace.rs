//! Tracing infrastructure for debugging parses.
//!
//! The tracer is a zero-cost abstraction: [`parse`](super::parse) runs with
//! [`NoopTracer`], whose hooks are `#[inline(always)]` no-ops that the
//! compiler removes along with their arguments. No tracing state lives in the
//! driver itself.

use rulewalk_bytecode::GrammarNode;
use rulewalk_core::{Colors, Token};

use super::error::ParseError;

const EXPAND: &str = "▶";
const NODE: &str = "·";
const ACCEPT: &str = "✓";
const REJECT: &str = "✗";
const ACTOR: &str = "⚡";
const PEEK: &str = "?";

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Validators, actors and rule expansions.
    #[default]
    Default,
    /// Also every popped node and every lookahead verdict.
    Verbose,
}

/// Hooks called by the driver at fixed points of a parse.
///
/// - `trace_begin` - after the stack is seeded
/// - `trace_node` - after a node is popped
/// - `trace_validator` - after a validator ran on the current token
/// - `trace_actor` - after an actor ran
/// - `trace_expand` - after a non-terminal picked an alternative
/// - `trace_peek` - after lookahead probed one alternative
/// - `trace_finish` - once, with the parse result
pub trait Tracer {
    fn trace_begin(&mut self, start: &GrammarNode);

    fn trace_node(&mut self, node: &GrammarNode);

    fn trace_validator(&mut self, node: &GrammarNode, token: &Token, accepted: bool);

    fn trace_actor(&mut self, node: &GrammarNode, token: &Token, ok: bool);

    /// `nodes` is the chosen alternative, left to right.
    fn trace_expand(&mut self, symbol: &GrammarNode, rule: usize, nodes: &[GrammarNode]);

    fn trace_peek(&mut self, rule: usize, accepted: bool);

    fn trace_finish(&mut self, result: &Result<(), ParseError>);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_begin(&mut self, _start: &GrammarNode) {}

    #[inline(always)]
    fn trace_node(&mut self, _node: &GrammarNode) {}

    #[inline(always)]
    fn trace_validator(&mut self, _node: &GrammarNode, _token: &Token, _accepted: bool) {}

    #[inline(always)]
    fn trace_actor(&mut self, _node: &GrammarNode, _token: &Token, _ok: bool) {}

    #[inline(always)]
    fn trace_expand(&mut self, _symbol: &GrammarNode, _rule: usize, _nodes: &[GrammarNode]) {}

    #[inline(always)]
    fn trace_peek(&mut self, _rule: usize, _accepted: bool) {}

    #[inline(always)]
    fn trace_finish(&mut self, _result: &Result<(), ParseError>) {}
}

/// Tracer that collects a readable parse log.
pub struct PrintTracer<'s> {
    /// Source the tokens were cut from.
    source: &'s str,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'s> PrintTracer<'s> {
    pub fn new(source: &'s str, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            source,
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// `Number "12"`, or just the kind for empty tokens.
    fn format_token(&self, token: &Token) -> String {
        let c = &self.colors;
        let text = token.text(self.source);
        if text.is_empty() {
            return format!("{}{:?}{}", c.dim, token.kind, c.reset);
        }
        format!("{}{:?}{} {}{:?}{}", c.dim, token.kind, c.reset, c.green, text, c.reset)
    }

    fn add_subline(&mut self, symbol: &str, content: &str) {
        self.lines.push(format!("  {symbol} {content}"));
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_begin(&mut self, start: &GrammarNode) {
        let c = self.colors;
        self.lines
            .push(format!("parse {}{}{}", c.blue, start.text(), c.reset));
    }

    fn trace_node(&mut self, node: &GrammarNode) {
        if !self.verbose() {
            return;
        }
        self.add_subline(NODE, node.text());
    }

    fn trace_validator(&mut self, node: &GrammarNode, token: &Token, accepted: bool) {
        let c = self.colors;
        let symbol = if accepted {
            format!("{}{ACCEPT}{}", c.green, c.reset)
        } else {
            format!("{}{REJECT}{}", c.red, c.reset)
        };
        let content = format!("{} {}", node.text(), self.format_token(token));
        self.add_subline(&symbol, &content);
    }

    fn trace_actor(&mut self, node: &GrammarNode, token: &Token, ok: bool) {
        let c = self.colors;
        let symbol = if ok {
            ACTOR.to_string()
        } else {
            format!("{}{REJECT}{}", c.red, c.reset)
        };
        let content = format!("{} {}", node.text(), self.format_token(token));
        self.add_subline(&symbol, &content);
    }

    fn trace_expand(&mut self, symbol: &GrammarNode, rule: usize, nodes: &[GrammarNode]) {
        let c = self.colors;
        let body = if nodes.is_empty() {
            "ε".to_string()
        } else {
            nodes.iter().map(GrammarNode::text).collect::<Vec<_>>().join(" ")
        };
        let content = format!(
            "{}{}{} {}r{rule}{} → {body}",
            c.blue,
            symbol.text(),
            c.reset,
            c.dim,
            c.reset
        );
        self.add_subline(EXPAND, &content);
    }

    fn trace_peek(&mut self, rule: usize, accepted: bool) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let verdict = if accepted { "accept" } else { "reject" };
        let content = format!("{}r{rule}{} {verdict}", c.dim, c.reset);
        self.add_subline(PEEK, &content);
    }

    fn trace_finish(&mut self, result: &Result<(), ParseError>) {
        let c = self.colors;
        let line = match result {
            Ok(()) => format!("{}ok{}", c.green, c.reset),
            Err(e) => format!("{}error{}: {e}", c.red, c.reset),
        };
        self.lines.push(line);
    }
}
