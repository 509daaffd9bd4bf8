//! Caret and selection addressing.
//!
//! A position names a top-level node by index plus a byte offset into that
//! node's concatenated text. There is no single global document offset;
//! structural edits reason about whole top-level slots, and text helpers
//! clamp and boundary-snap the offset at the point of use.

use serde::{Deserialize, Serialize};

/// A collapsed text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caret {
    /// Index into the document's top-level children.
    pub node: usize,

    /// Byte offset into the node's concatenated text.
    pub offset: usize,
}

impl Caret {
    pub fn new(node: usize, offset: usize) -> Self {
        Self { node, offset }
    }

    /// Caret at the start of a top-level node.
    pub fn start_of(node: usize) -> Self {
        Self { node, offset: 0 }
    }
}

/// Selection state as reported by the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    /// A single collapsed caret.
    Caret(Caret),
    /// A directional range between two positions.
    Range { anchor: Caret, head: Caret },
}

impl Selection {
    /// The collapsed caret, if this selection is one. A zero-width range
    /// counts as collapsed.
    pub fn collapsed(&self) -> Option<Caret> {
        match self {
            Selection::Caret(caret) => Some(*caret),
            Selection::Range { anchor, head } if anchor == head => Some(*anchor),
            Selection::Range { .. } => None,
        }
    }
}
