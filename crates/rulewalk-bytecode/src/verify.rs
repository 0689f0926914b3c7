//! Structural verification of grammar tables.
//!
//! Grammars loaded from bytes are checked before use; the driver indexes the
//! tables directly and relies on these invariants.

use crate::{CompiledGrammar, GrammarError};

impl CompiledGrammar {
    /// Check every table invariant:
    /// - rules are sorted by name
    /// - each rule's node range is well-formed and inside the node table
    /// - node ranges of distinct rules never overlap
    /// - each non-terminal's rule range is non-empty, inside the rule table,
    ///   and (when the node carries text) covers only rules of that name
    pub fn verify(&self) -> Result<(), GrammarError> {
        self.verify_rule_order()?;
        self.verify_rule_ranges()?;
        self.verify_non_terminals()
    }

    fn verify_rule_order(&self) -> Result<(), GrammarError> {
        for (i, pair) in self.rules.windows(2).enumerate() {
            if pair[0].name > pair[1].name {
                return Err(GrammarError::UnsortedRules { index: i + 1 });
            }
        }
        Ok(())
    }

    fn verify_rule_ranges(&self) -> Result<(), GrammarError> {
        let mut spans = Vec::with_capacity(self.rules.len());
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.begin > rule.end {
                return Err(GrammarError::InvertedNodeRange {
                    rule: index,
                    begin: rule.begin,
                    end: rule.end,
                });
            }
            if rule.end as usize > self.nodes.len() {
                return Err(GrammarError::NodeRangeOutOfBounds {
                    rule: index,
                    end: rule.end,
                    nodes: self.nodes.len(),
                });
            }
            if !rule.is_empty() {
                spans.push((rule.begin, rule.end, index));
            }
        }

        spans.sort_unstable();
        for pair in spans.windows(2) {
            let (_, prev_end, first) = pair[0];
            let (next_begin, _, second) = pair[1];
            if next_begin < prev_end {
                return Err(GrammarError::OverlappingRules { first, second });
            }
        }
        Ok(())
    }

    fn verify_non_terminals(&self) -> Result<(), GrammarError> {
        for (index, node) in self.nodes.iter().enumerate() {
            let Some(range) = node.rules() else {
                continue;
            };
            if range.is_empty() {
                return Err(GrammarError::EmptyRuleRange {
                    node: index,
                    begin: range.start,
                    end: range.end,
                });
            }
            if range.end > self.rules.len() {
                return Err(GrammarError::RuleRangeOutOfBounds {
                    node: index,
                    end: range.end,
                    rules: self.rules.len(),
                });
            }
            if node.text().is_empty() {
                continue;
            }
            for rule_index in range {
                let rule = &self.rules[rule_index];
                if rule.name != node.text() {
                    return Err(GrammarError::RuleNameMismatch {
                        node: index,
                        rule: rule_index,
                        expected: node.text().to_owned(),
                        found: rule.name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
