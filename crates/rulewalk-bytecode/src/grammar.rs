//! Rule and node tables.

use std::ops::Range;

use rulewalk_core::SmallString;
use serde::{Deserialize, Serialize};

use crate::GrammarNode;

/// Rule (non-terminal) name.
pub type RuleName = SmallString<16>;

/// One alternative production of a non-terminal.
///
/// Several rules may share a name; each is one `|`-separated alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub name: RuleName,
    /// First node of the alternative.
    pub begin: u32,
    /// One past the last node.
    pub end: u32,
}

impl GrammarRule {
    pub fn new(name: RuleName, begin: u32, end: u32) -> Self {
        Self { name, begin, end }
    }

    #[inline]
    pub fn node_range(&self) -> Range<usize> {
        self.begin as usize..self.end as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A compiled grammar: rules sorted by name, plus the nodes they reference.
///
/// Built once, then shared read-only by any number of parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledGrammar {
    pub rules: Vec<GrammarRule>,
    pub nodes: Vec<GrammarNode>,
}

impl CompiledGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rules: usize, nodes: usize) -> Self {
        Self {
            rules: Vec::with_capacity(rules),
            nodes: Vec::with_capacity(nodes),
        }
    }

    #[inline]
    pub fn rule(&self, index: usize) -> Option<&GrammarRule> {
        self.rules.get(index)
    }

    /// Nodes of one alternative, in left-to-right order.
    pub fn rule_nodes(&self, index: usize) -> Option<&[GrammarNode]> {
        let rule = self.rules.get(index)?;
        self.nodes.get(rule.node_range())
    }

    /// Range of rules named `name`.
    ///
    /// Binary search; only meaningful once rules are sorted by name.
    pub fn find_rules(&self, name: &str) -> Range<usize> {
        let begin = self.rules.partition_point(|r| r.name.as_str() < name);
        let end = self.rules.partition_point(|r| r.name.as_str() <= name);
        begin..end
    }

    /// Non-terminal node for the symbol `name`, e.g. a start symbol.
    pub fn symbol(&self, name: &str) -> Option<GrammarNode> {
        let rules = self.find_rules(name);
        if rules.is_empty() {
            return None;
        }
        GrammarNode::non_terminal(rules).ok()?.with_text(name).ok()
    }

    /// Distinct rule names in table order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        let mut prev: Option<&str> = None;
        self.rules.iter().filter_map(move |r| {
            let name = r.name.as_str();
            if prev == Some(name) {
                return None;
            }
            prev = Some(name);
            Some(name)
        })
    }
}
