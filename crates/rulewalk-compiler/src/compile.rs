//! Grammar text to rule/node tables.
//!
//! Compilation runs three passes over the text:
//!
//! 1. sizing: count rule-opening words and node words
//! 2. emission: append rules and nodes in source order
//! 3. resolution: sort rules by name and point every non-terminal at the
//!    contiguous range of rules carrying its name
//!
//! A word ending in `=` opens a rule, `|` opens another alternative of the
//! current rule, a word containing `>` is a terminal and anything else is a
//! non-terminal.

use rulewalk_bytecode::{CompiledGrammar, GrammarError, GrammarNode, GrammarRule, RuleName};

use crate::locator::GrammarLocator;
use crate::words::Words;
use crate::{Error, Result};

/// Table sizes a grammar text will produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrammarSize {
    pub rules: usize,
    pub nodes: usize,
}

/// Counts rules and nodes without building anything.
pub fn grammar_size(text: &str) -> GrammarSize {
    let mut size = GrammarSize::default();
    for (_, word) in Words::new(text) {
        if opens_rule(word) {
            size.rules += 1;
        } else {
            size.nodes += 1;
        }
    }
    size
}

fn opens_rule(word: &str) -> bool {
    word.ends_with('=') || word == "|"
}

/// Compiles grammar text into sorted, resolved tables.
///
/// The first word must declare a rule (`name=`).
pub fn compile<L>(locator: &L, text: &str) -> Result<CompiledGrammar>
where
    L: GrammarLocator + ?Sized,
{
    let size = grammar_size(text);
    let mut grammar = CompiledGrammar::with_capacity(size.rules, size.nodes);

    for (offset, word) in Words::new(text) {
        if let Some(name) = word.strip_suffix('=') {
            let begin = node_count(&grammar)?;
            let name = RuleName::new(name).map_err(|e| invalid(word, e.into()))?;
            grammar.rules.push(GrammarRule::new(name, begin, begin));
            continue;
        }

        let Some(current) = grammar.rules.last_mut() else {
            return Err(Error::MissingRuleDeclaration {
                word: word.to_owned(),
                offset,
            });
        };

        if word == "|" {
            let alternative = GrammarRule::new(current.name, current.end, current.end);
            grammar.rules.push(alternative);
        } else {
            grammar.nodes.push(make_node(locator, word)?);
            current.end += 1;
        }
    }

    debug_assert_eq!(grammar.rules.len(), size.rules);
    debug_assert_eq!(grammar.nodes.len(), size.nodes);

    resolve_non_terminals(&mut grammar)?;
    Ok(grammar)
}

/// Builds the node for one word.
///
/// `validator>actor` becomes a terminal; either side may be empty. Anything
/// else becomes a non-terminal with an unresolved (empty) rule range.
pub fn make_node<L>(locator: &L, word: &str) -> Result<GrammarNode>
where
    L: GrammarLocator + ?Sized,
{
    let node = match word.split_once('>') {
        Some((validator, actor)) => {
            let validator = match validator {
                "" => None,
                name => Some(locator.find_validator(name).ok_or_else(|| {
                    Error::UnknownValidator {
                        name: name.to_owned(),
                    }
                })?),
            };
            let actor = match actor {
                "" => None,
                name => Some(locator.find_actor(name).ok_or_else(|| Error::UnknownActor {
                    name: name.to_owned(),
                })?),
            };
            GrammarNode::terminal(validator, actor)
        }
        None => GrammarNode::non_terminal(0..0),
    };

    node.and_then(|n| n.with_text(word))
        .map_err(|source| invalid(word, source))
}

/// Sorts rules by name and fills in every non-terminal's rule range.
///
/// The sort is stable, so alternatives keep their source order.
pub fn resolve_non_terminals(grammar: &mut CompiledGrammar) -> Result<()> {
    grammar.rules.sort_by(|a, b| a.name.cmp(&b.name));

    for i in 0..grammar.nodes.len() {
        let node = grammar.nodes[i];
        if node.is_terminal() {
            continue;
        }
        let name = node.text();
        let rules = grammar.find_rules(name);
        if rules.is_empty() {
            return Err(Error::RuleNotFound {
                name: name.to_owned(),
            });
        }
        grammar.nodes[i] = GrammarNode::non_terminal(rules)
            .and_then(|n| n.with_text(name))
            .map_err(|source| invalid(name, source))?;
    }

    Ok(())
}

fn node_count(grammar: &CompiledGrammar) -> Result<u32> {
    u32::try_from(grammar.nodes.len()).map_err(|_| Error::TooManyNodes(grammar.nodes.len()))
}

fn invalid(word: &str, source: GrammarError) -> Error {
    Error::InvalidSymbol {
        word: word.to_owned(),
        source,
    }
}
