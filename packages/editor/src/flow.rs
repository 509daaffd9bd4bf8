//! # Flow-Editing State Machine
//!
//! Intercepts the four flow keys (Enter, Backspace, `(`, `)`) while the
//! caret sits inside a `character`, `dialogue`, or `parenthetical` block
//! and rewrites the document so dialogue grouping follows screenplay
//! convention: Enter cycles character and speech blocks, Backspace unwinds
//! empty ones, and the parentheses carve parentheticals out of dialogue as
//! they are typed.
//!
//! ## Handling contract
//!
//! A key is handled only when all of these hold:
//!
//! 1. No input-method composition is in progress
//! 2. The selection is a single collapsed caret
//! 3. The caret's top-level index is in bounds
//! 4. The caret's block is a `character`, `dialogue`, or `parenthetical`
//! 5. The key's own transition applies (Backspace additionally needs offset
//!    0 in an empty block that is not the document's last node)
//!
//! Anything else returns [`KeyOutcome::NotHandled`] without touching the
//! document, and the host falls back to its default key behavior. Declining
//! is normal control flow, not an error.
//!
//! Each handled key plans and commits exactly one [`Transaction`], so the
//! document is never observable in an intermediate state.

use slugline_document::{push_text, split_runs, Document, IdGenerator, Node, NodeKind};
use tracing::{debug, instrument, trace};

use crate::caret::{Caret, Selection};
use crate::key::{Key, KeyEvent};
use crate::transaction::{EditError, Transaction};

/// Result of offering a key event to the flow machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A transition was committed; the caret belongs at `caret` now.
    Handled { caret: Caret },
    /// Preconditions unmet; the document is untouched.
    NotHandled,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled { .. })
    }
}

/// The block kinds the flow machine operates inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowKind {
    Character,
    Dialogue,
    Parenthetical,
}

fn flow_kind(kind: NodeKind) -> Option<FlowKind> {
    match kind {
        NodeKind::Character => Some(FlowKind::Character),
        NodeKind::Dialogue => Some(FlowKind::Dialogue),
        NodeKind::Parenthetical => Some(FlowKind::Parenthetical),
        NodeKind::SceneHeading
        | NodeKind::Action
        | NodeKind::Transition
        | NodeKind::General
        | NodeKind::DialogueBlock
        | NodeKind::SpeechFlow => None,
    }
}

/// Offer a key event to the machine.
///
/// When the outcome is [`KeyOutcome::Handled`], the planned transaction has
/// already been committed to `doc` and the returned caret is where the host
/// should place its selection.
#[instrument(skip(doc, ids, selection), fields(key = ?event.key, composing = event.composing))]
pub fn handle_key(
    doc: &mut Document,
    ids: &mut IdGenerator,
    event: &KeyEvent,
    selection: &Selection,
) -> Result<KeyOutcome, EditError> {
    let Some(transaction) = plan_key(doc, ids, event, selection) else {
        return Ok(KeyOutcome::NotHandled);
    };

    let ops = transaction.ops().len();
    let caret = transaction.apply(doc)?;
    debug!(node = caret.node, ops, "flow transition committed");
    Ok(KeyOutcome::Handled { caret })
}

fn plan_key(
    doc: &Document,
    ids: &mut IdGenerator,
    event: &KeyEvent,
    selection: &Selection,
) -> Option<Transaction> {
    if event.composing {
        trace!("declined: composition in progress");
        return None;
    }
    let Some(caret) = selection.collapsed() else {
        trace!("declined: range selection");
        return None;
    };
    let Some(node) = doc.children.get(caret.node) else {
        trace!(node = caret.node, "declined: caret out of bounds");
        return None;
    };
    let Some(kind) = flow_kind(node.kind) else {
        trace!(kind = node.kind.name(), "declined: block outside flow set");
        return None;
    };

    match event.key {
        Key::Enter => Some(plan_enter(doc, ids, caret, kind)),
        Key::Backspace => plan_backspace(doc, caret, node),
        Key::Char('(') if kind == FlowKind::Dialogue => Some(plan_open_paren(ids, caret, node)),
        Key::Char(')') if kind == FlowKind::Parenthetical => {
            Some(plan_close_paren(ids, caret, node))
        }
        Key::Char(other) => {
            trace!(key = %other, "declined: no transition for this key here");
            None
        }
    }
}

/// Enter either rejoins the block that already continues the group after
/// the caret's node, or extends the group with the conventional next block.
fn plan_enter(doc: &Document, ids: &mut IdGenerator, caret: Caret, kind: FlowKind) -> Transaction {
    let next = doc.children.get(caret.node + 1).map(|node| node.kind);
    let (rejoin, extension) = match kind {
        FlowKind::Character => (
            matches!(next, Some(NodeKind::Dialogue | NodeKind::Parenthetical)),
            NodeKind::Dialogue,
        ),
        FlowKind::Dialogue => (next == Some(NodeKind::Character), NodeKind::Character),
        FlowKind::Parenthetical => (next == Some(NodeKind::Dialogue), NodeKind::Dialogue),
    };

    let destination = Caret::start_of(caret.node + 1);
    if rejoin {
        Transaction::new(destination)
    } else {
        Transaction::new(destination).insert(caret.node + 1, Node::new(extension, ids.new_id()))
    }
}

/// Backspace deletes only an empty flow block at offset 0, and never the
/// document's last remaining top-level node.
fn plan_backspace(doc: &Document, caret: Caret, node: &Node) -> Option<Transaction> {
    if caret.offset != 0 || node.text_len() != 0 {
        trace!(node = caret.node, "declined: backspace inside text");
        return None;
    }
    if doc.children.len() == 1 {
        trace!("declined: last remaining top-level node");
        return None;
    }

    let destination = if caret.node == 0 {
        Caret::start_of(0)
    } else {
        Caret::new(caret.node - 1, doc.children[caret.node - 1].text_len())
    };
    Some(Transaction::new(destination).remove(caret.node))
}

/// `(` splits the dialogue around a fresh parenthetical seeded with the
/// literal `(`. The leading dialogue is dropped only when the whole block
/// is empty; the trailing dialogue always exists so typing can continue,
/// and marks survive on both sides of the split.
fn plan_open_paren(ids: &mut IdGenerator, caret: Caret, node: &Node) -> Transaction {
    let paren = Node::new(NodeKind::Parenthetical, ids.new_id()).with_text("(");

    if node.text_len() == 0 {
        // The empty dialogue moves whole behind the parenthetical.
        return Transaction::new(Caret::new(caret.node, 1))
            .replace(caret.node, vec![paren, node.clone()]);
    }

    let (before, after) = split_runs(&node.runs, caret.offset);
    let mut lead = node.clone();
    lead.runs = before;
    let mut trail = Node::new(NodeKind::Dialogue, ids.new_id());
    trail.runs = after;

    Transaction::new(Caret::new(caret.node + 1, 1))
        .replace(caret.node, vec![lead, paren, trail])
}

/// `)` closes the parenthetical at the caret and resumes dialogue after it.
fn plan_close_paren(ids: &mut IdGenerator, caret: Caret, node: &Node) -> Transaction {
    let (before, after) = split_runs(&node.runs, caret.offset);

    let mut closed = node.clone();
    closed.runs = before;
    push_text(&mut closed.runs, ")");

    let mut trail = Node::new(NodeKind::Dialogue, ids.new_id());
    trail.runs = after;

    Transaction::new(Caret::start_of(caret.node + 1)).replace(caret.node, vec![closed, trail])
}
