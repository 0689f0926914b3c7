//! Grammar nodes.
//!
//! A node is either a terminal, matched against one token through an optional
//! validator and followed by an optional actor, or a non-terminal that stands
//! for every alternative of a named rule.
//!
//! ## Packed form
//!
//! Nodes are stored as one `u32` in the binary format:
//!
//! ```text
//! terminal:      1 | validator:15 | actor:16
//! non-terminal:  0 | rules_begin:15 | rules_end:16 (≤ 0x7FFF)
//! ```
//!
//! The tag bit never overlaps the index space, so every index stored in the
//! upper half is limited to 15 bits. Constructors reject larger indices.

use std::num::NonZeroU16;
use std::ops::Range;

use rulewalk_core::SmallString;
use serde::{Deserialize, Serialize};

use crate::GrammarError;

/// Largest index a packed node can hold.
pub const MAX_INDEX: u16 = 0x7FFF;

/// Tag bit marking a packed terminal.
pub const TERMINAL_BIT: u32 = 0x8000_0000;

/// Grammar-text word kept on each node for diagnostics.
pub type NodeText = SmallString<28>;

/// Shape of a grammar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `None` means "no validation" / "no action".
    Terminal {
        validator: Option<NonZeroU16>,
        actor: Option<NonZeroU16>,
    },
    /// Half-open range into the rule table.
    NonTerminal { rules_begin: u16, rules_end: u16 },
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Terminal {
            validator: None,
            actor: None,
        }
    }
}

/// One symbol of a compiled grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PackedNode", try_from = "PackedNode")]
pub struct GrammarNode {
    kind: NodeKind,
    text: NodeText,
}

impl GrammarNode {
    pub fn terminal(
        validator: Option<NonZeroU16>,
        actor: Option<NonZeroU16>,
    ) -> Result<Self, GrammarError> {
        if let Some(v) = validator
            && v.get() > MAX_INDEX
        {
            return Err(GrammarError::IndexOverflow {
                what: "validator",
                index: v.get() as usize,
            });
        }
        Ok(Self {
            kind: NodeKind::Terminal { validator, actor },
            text: NodeText::default(),
        })
    }

    pub fn non_terminal(rules: Range<usize>) -> Result<Self, GrammarError> {
        let rules_begin = checked_index("rules_begin", rules.start)?;
        let rules_end = checked_index("rules_end", rules.end)?;
        Ok(Self {
            kind: NodeKind::NonTerminal {
                rules_begin,
                rules_end,
            },
            text: NodeText::default(),
        })
    }

    /// Attach the grammar-text word this node was compiled from.
    pub fn with_text(mut self, text: &str) -> Result<Self, GrammarError> {
        self.text = NodeText::new(text)?;
        Ok(self)
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    /// Validator of a terminal; `None` for non-terminals.
    pub fn validator(&self) -> Option<NonZeroU16> {
        match self.kind {
            NodeKind::Terminal { validator, .. } => validator,
            NodeKind::NonTerminal { .. } => None,
        }
    }

    /// Actor of a terminal; `None` for non-terminals.
    pub fn actor(&self) -> Option<NonZeroU16> {
        match self.kind {
            NodeKind::Terminal { actor, .. } => actor,
            NodeKind::NonTerminal { .. } => None,
        }
    }

    /// Rule range of a non-terminal; `None` for terminals.
    pub fn rules(&self) -> Option<Range<usize>> {
        match self.kind {
            NodeKind::NonTerminal {
                rules_begin,
                rules_end,
            } => Some(rules_begin as usize..rules_end as usize),
            NodeKind::Terminal { .. } => None,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Inline copy of the text, for error values that outlive the grammar.
    #[inline]
    pub fn label(&self) -> NodeText {
        self.text
    }

    /// Encode the node kind into its 32-bit packed form.
    pub fn pack(&self) -> u32 {
        match self.kind {
            NodeKind::Terminal { validator, actor } => {
                let v = validator.map_or(0, NonZeroU16::get) as u32;
                let a = actor.map_or(0, NonZeroU16::get) as u32;
                TERMINAL_BIT | (v << 16) | a
            }
            NodeKind::NonTerminal {
                rules_begin,
                rules_end,
            } => ((rules_begin as u32) << 16) | rules_end as u32,
        }
    }

    /// Decode a packed node. The text is left empty.
    pub fn unpack(raw: u32) -> Result<Self, GrammarError> {
        let high = ((raw >> 16) & MAX_INDEX as u32) as u16;
        let low = (raw & 0xFFFF) as u16;
        if raw & TERMINAL_BIT != 0 {
            Self::terminal(NonZeroU16::new(high), NonZeroU16::new(low))
        } else {
            Self::non_terminal(high as usize..low as usize)
        }
    }
}

fn checked_index(what: &'static str, index: usize) -> Result<u16, GrammarError> {
    if index > MAX_INDEX as usize {
        return Err(GrammarError::IndexOverflow { what, index });
    }
    Ok(index as u16)
}

/// Wire form of a node.
#[derive(Serialize, Deserialize)]
struct PackedNode {
    raw: u32,
    text: NodeText,
}

impl From<GrammarNode> for PackedNode {
    fn from(node: GrammarNode) -> Self {
        Self {
            raw: node.pack(),
            text: node.text,
        }
    }
}

impl TryFrom<PackedNode> for GrammarNode {
    type Error = GrammarError;

    fn try_from(packed: PackedNode) -> Result<Self, Self::Error> {
        let mut node = GrammarNode::unpack(packed.raw)?;
        node.text = packed.text;
        Ok(node)
    }
}
