//! # Projection Builder
//!
//! Derives a grouped outline from a flat document without mutating it or
//! copying nodes. The projection is the read model consumers render from;
//! the flat document stays the single source of truth.
//!
//! Entries borrow from the document, so the borrow checker enforces the
//! staleness rule for free: any mutation of the document invalidates every
//! outstanding projection at compile time.

use serde::Serialize;
use slugline_document::{Document, Node, NodeKind};
use std::ops::Range;
use tracing::{instrument, trace};

/// One entry of the derived outline.
///
/// Indices are positions in the flat top-level sequence. A `DialogueGroup`
/// covers `start..end` with `start` pointing at the character cue itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "entry", rename_all = "camelCase")]
pub enum ProjectionEntry<'a> {
    /// A standalone block at a single index.
    #[serde(rename_all = "camelCase")]
    Block { index: usize, node: &'a Node },
    /// A character cue fused with its maximal run of speech segments.
    #[serde(rename_all = "camelCase")]
    DialogueGroup {
        start: usize,
        end: usize,
        character: &'a Node,
        segments: Vec<&'a Node>,
    },
}

impl<'a> ProjectionEntry<'a> {
    /// Top-level index range this entry covers.
    pub fn range(&self) -> Range<usize> {
        match self {
            ProjectionEntry::Block { index, .. } => *index..*index + 1,
            ProjectionEntry::DialogueGroup { start, end, .. } => *start..*end,
        }
    }
}

/// Build the grouped outline in a single left-to-right pass.
///
/// Every flat node lands in exactly one entry. A `character` opens a group
/// and greedily absorbs the following `dialogue` and `parenthetical`
/// neighbors; any other kind becomes a standalone block. Composite nodes
/// should not appear in a canonical document; if one does, it is skipped,
/// and because it occupies an index it also terminates any speech run
/// adjacency across it.
#[instrument(skip(doc), fields(nodes = doc.children.len()))]
pub fn build_projection(doc: &Document) -> Vec<ProjectionEntry<'_>> {
    let nodes = &doc.children;
    let mut entries = Vec::new();
    let mut index = 0;

    while index < nodes.len() {
        let node = &nodes[index];
        if !node.kind.is_flat() {
            trace!(index, kind = node.kind.name(), "skipping composite node");
            index += 1;
            continue;
        }
        if node.kind != NodeKind::Character {
            entries.push(ProjectionEntry::Block { index, node });
            index += 1;
            continue;
        }

        let start = index;
        index += 1;
        let mut segments = Vec::new();
        while index < nodes.len() && nodes[index].kind.is_speech() {
            segments.push(&nodes[index]);
            index += 1;
        }
        entries.push(ProjectionEntry::DialogueGroup {
            start,
            end: index,
            character: node,
            segments,
        });
    }

    entries
}
