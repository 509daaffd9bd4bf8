//! # Canonicalizer
//!
//! Structural rewrites between the two document shapes:
//!
//! - the **flat form** — top-level sequence of the seven block kinds, the
//!   representation the editor mutates;
//! - the **nested form** — dialogue groups materialized as
//!   `dialogueBlock { character, speechFlow { segments } }` composites, for
//!   consumers that want group boundaries explicit in the tree.
//!
//! Both rewrites are total, side-effect-free functions over whole documents.
//! The laws they obey:
//!
//! - `unwrap_document` is idempotent and a fixed point on flat input
//! - `unwrap_document(inflate_document(x))` has the same top-level sequence
//!   as `unwrap_document(x)` — wrapping loses no grouping information
//! - neither ever yields a document with zero top-level children

use slugline_document::{Document, IdGenerator, Node, NodeKind};
use tracing::{debug, instrument};

/// Reduce a document to the flat canonical form.
///
/// Every `dialogueBlock` and `speechFlow` anywhere in the tree is replaced
/// by its unwrapped children in order; all other nodes are copied with their
/// own children recursively unwrapped. A composite missing expected children
/// simply contributes whatever sub-parts are present. If the root would end
/// up empty, a single empty `general` block is substituted.
#[instrument(skip(doc), fields(nodes = doc.children.len()))]
pub fn unwrap_document(doc: &Document) -> Document {
    let mut children = unwrap_nodes(&doc.children);
    if children.is_empty() {
        let mut ids = IdGenerator::from_seed("canonical");
        children.push(Node::new(NodeKind::General, ids.new_id()));
    }
    debug!(nodes = children.len(), "canonicalized document");
    Document::from_nodes(children)
}

fn unwrap_nodes(nodes: &[Node]) -> Vec<Node> {
    let mut out = Vec::new();
    for node in nodes {
        match node.kind {
            NodeKind::DialogueBlock | NodeKind::SpeechFlow => {
                out.extend(unwrap_nodes(&node.children));
            }
            NodeKind::SceneHeading
            | NodeKind::Action
            | NodeKind::Character
            | NodeKind::Dialogue
            | NodeKind::Parenthetical
            | NodeKind::Transition
            | NodeKind::General => {
                let mut copy = node.clone();
                copy.children = unwrap_nodes(&node.children);
                out.push(copy);
            }
        }
    }
    out
}

/// Materialize dialogue groups as nested composite blocks.
///
/// The input is canonicalized first, so inflation never observes a
/// composite. The flat sequence is then scanned left to right: every
/// `character` fuses with the maximal run of immediately following speech
/// segments into one `dialogueBlock` (the segment list may be empty); all
/// other nodes pass through unchanged.
#[instrument(skip(doc), fields(nodes = doc.children.len()))]
pub fn inflate_document(doc: &Document) -> Document {
    let flat = unwrap_document(doc);
    let mut out = Vec::new();
    let mut nodes = flat.children.into_iter().peekable();

    while let Some(node) = nodes.next() {
        if node.kind != NodeKind::Character {
            out.push(node);
            continue;
        }
        let mut segments = Vec::new();
        while let Some(segment) = nodes.next_if(|next| next.kind.is_speech()) {
            segments.push(segment);
        }
        out.push(dialogue_block(node, segments));
    }

    debug!(nodes = out.len(), "inflated document");
    Document::from_nodes(out)
}

/// Wrapper ids derive from the fused character's id, keeping inflation a
/// pure function: the same flat document always inflates identically.
fn dialogue_block(character: Node, segments: Vec<Node>) -> Node {
    let block_id = format!("{}-block", character.id);
    let mut speech = Node::new(NodeKind::SpeechFlow, format!("{}-speech", character.id));
    speech.children = segments;

    Node::new(NodeKind::DialogueBlock, block_id)
        .with_child(character)
        .with_child(speech)
}
