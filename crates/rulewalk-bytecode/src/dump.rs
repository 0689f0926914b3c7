//! Human-readable grammar dump for debugging and snapshot tests.
//!
//! ```text
//! rules
//!   0 Expr n0..2
//!   1 Expr n2..3
//! nodes
//!   0 Term r2..3
//!   1 PLUS> v1 a-
//! ```
//!
//! Non-terminals show their rule range (`r`), terminals their validator (`v`)
//! and actor (`a`) ids, `-` marking an absent one.

use std::fmt::Write as _;
use std::num::NonZeroU16;

use rulewalk_core::Colors;

use crate::{CompiledGrammar, NodeKind};

/// Generate a human-readable dump of the grammar tables.
pub fn dump(grammar: &CompiledGrammar, colors: Colors) -> String {
    let mut out = String::new();
    let c = colors;

    out.push_str("rules\n");
    let width = width_for_count(grammar.rules.len());
    for (i, rule) in grammar.rules.iter().enumerate() {
        writeln!(
            out,
            "  {i:>width$} {}{}{} {}n{}..{}{}",
            c.blue, rule.name, c.reset, c.dim, rule.begin, rule.end, c.reset
        )
        .expect("writing to a String cannot fail");
    }

    out.push_str("nodes\n");
    let width = width_for_count(grammar.nodes.len());
    for (i, node) in grammar.nodes.iter().enumerate() {
        let payload = match node.kind() {
            NodeKind::Terminal { validator, actor } => {
                format!("v{} a{}", id_or_dash(validator), id_or_dash(actor))
            }
            NodeKind::NonTerminal {
                rules_begin,
                rules_end,
            } => format!("r{rules_begin}..{rules_end}"),
        };
        let name_color = if node.is_terminal() { c.green } else { c.blue };
        writeln!(
            out,
            "  {i:>width$} {name_color}{}{} {}{payload}{}",
            node.text(),
            c.reset,
            c.dim,
            c.reset
        )
        .expect("writing to a String cannot fail");
    }

    out
}

fn id_or_dash(id: Option<NonZeroU16>) -> String {
    id.map_or_else(|| "-".to_owned(), |id| id.to_string())
}

/// Digits needed to print indices below `count`.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}
