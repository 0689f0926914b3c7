use std::num::NonZeroU16;

use rulewalk_bytecode::{CompiledGrammar, GrammarNode};
use rulewalk_core::Token;

/// Caller-side half of a parse.
///
/// Supplies the grammar and the two boundary nodes, and gives meaning to the
/// validator and actor ids stored in terminals. The context owns whatever
/// state actors build up; the driver only borrows it for one parse.
pub trait ParseContext {
    fn grammar(&self) -> &CompiledGrammar;

    /// Pushed first, popped last. Usually a terminal whose validator accepts
    /// `EndOfData`.
    fn end_node(&self) -> GrammarNode;

    fn start_node(&self) -> GrammarNode;

    /// Called once, after the stack is seeded and before the first pop.
    fn begin_parsing(&mut self) {}

    /// Must not have side effects: the lookahead probe calls it speculatively.
    fn check_validator(&self, token: &Token, validator: NonZeroU16) -> bool;

    /// Returns `false` to abort the parse.
    fn run_actor(&mut self, token: &Token, actor: NonZeroU16) -> bool;
}

impl<C: ParseContext + ?Sized> ParseContext for &mut C {
    fn grammar(&self) -> &CompiledGrammar {
        (**self).grammar()
    }

    fn end_node(&self) -> GrammarNode {
        (**self).end_node()
    }

    fn start_node(&self) -> GrammarNode {
        (**self).start_node()
    }

    fn begin_parsing(&mut self) {
        (**self).begin_parsing()
    }

    fn check_validator(&self, token: &Token, validator: NonZeroU16) -> bool {
        (**self).check_validator(token, validator)
    }

    fn run_actor(&mut self, token: &Token, actor: NonZeroU16) -> bool {
        (**self).run_actor(token, actor)
    }
}
