//! # Edit Transactions
//!
//! Every structural edit is planned as a script of top-level operations
//! plus a caret destination, then committed atomically. The whole script is
//! validated before the first operation runs, so a rejected transaction
//! leaves the document untouched and no partial application is ever
//! observable.
//!
//! Operation indices address the document as it stands when that operation
//! runs: later operations see the effect of earlier ones.

use serde::{Deserialize, Serialize};
use slugline_document::{Document, Node};
use thiserror::Error;

use crate::caret::Caret;

/// One top-level structural operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditOp {
    /// Insert a node so that it lands at `index`.
    Insert { index: usize, node: Node },

    /// Remove the node at `index`.
    Remove { index: usize },

    /// Replace the node at `index` with a sequence of nodes.
    Replace { index: usize, nodes: Vec<Node> },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Operation index {index} out of bounds: document has {len} top-level nodes")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Caret node {node} out of bounds: document has {len} top-level nodes")]
    CaretOutOfBounds { node: usize, len: usize },

    #[error("Edit would leave the document with zero top-level nodes")]
    WouldEmptyDocument,
}

/// An atomic edit script with its caret destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    ops: Vec<EditOp>,
    caret: Caret,
}

impl Transaction {
    /// Start a script that will leave the caret at `caret`. A script with
    /// no operations is a pure caret move.
    pub fn new(caret: Caret) -> Self {
        Self {
            ops: Vec::new(),
            caret,
        }
    }

    pub fn insert(mut self, index: usize, node: Node) -> Self {
        self.ops.push(EditOp::Insert { index, node });
        self
    }

    pub fn remove(mut self, index: usize) -> Self {
        self.ops.push(EditOp::Remove { index });
        self
    }

    pub fn replace(mut self, index: usize, nodes: Vec<Node>) -> Self {
        self.ops.push(EditOp::Replace { index, nodes });
        self
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Validate without applying.
    ///
    /// Replays the script against the document's child count, checking every
    /// operation index, that the final document keeps at least one top-level
    /// node, and that the caret destination exists afterwards.
    pub fn validate(&self, doc: &Document) -> Result<(), EditError> {
        let mut len = doc.children.len();
        for op in &self.ops {
            match op {
                EditOp::Insert { index, .. } => {
                    if *index > len {
                        return Err(EditError::IndexOutOfBounds { index: *index, len });
                    }
                    len += 1;
                }
                EditOp::Remove { index } => {
                    if *index >= len {
                        return Err(EditError::IndexOutOfBounds { index: *index, len });
                    }
                    len -= 1;
                }
                EditOp::Replace { index, nodes } => {
                    if *index >= len {
                        return Err(EditError::IndexOutOfBounds { index: *index, len });
                    }
                    len = len - 1 + nodes.len();
                }
            }
        }
        if len == 0 {
            return Err(EditError::WouldEmptyDocument);
        }
        if self.caret.node >= len {
            return Err(EditError::CaretOutOfBounds {
                node: self.caret.node,
                len,
            });
        }
        Ok(())
    }

    /// Commit the script. Validates first; on error the document is
    /// untouched. Returns the caret destination on success.
    pub fn apply(self, doc: &mut Document) -> Result<Caret, EditError> {
        self.validate(doc)?;

        let Transaction { ops, caret } = self;
        for op in ops {
            match op {
                EditOp::Insert { index, node } => doc.children.insert(index, node),
                EditOp::Remove { index } => {
                    doc.children.remove(index);
                }
                EditOp::Replace { index, nodes } => {
                    doc.children.splice(index..index + 1, nodes);
                }
            }
        }
        Ok(caret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slugline_document::NodeKind;

    fn doc() -> Document {
        Document::from_nodes(vec![
            Node::new(NodeKind::Character, "c1").with_text("JOHN"),
            Node::new(NodeKind::Dialogue, "d1").with_text("Hello."),
        ])
    }

    #[test]
    fn test_insert_remove_replace_sequence() {
        let mut doc = doc();

        let caret = Transaction::new(Caret::start_of(1))
            .insert(2, Node::new(NodeKind::Character, "c2"))
            .remove(0)
            .replace(0, vec![Node::new(NodeKind::Parenthetical, "p1").with_text("(beat)")])
            .apply(&mut doc)
            .unwrap();

        assert_eq!(caret, Caret::start_of(1));
        assert_eq!(doc.kinds(), vec![NodeKind::Parenthetical, NodeKind::Character]);
    }

    #[test]
    fn test_caret_only_transaction_moves_nothing() {
        let mut doc = doc();
        let before = doc.clone();

        let caret = Transaction::new(Caret::new(1, 6)).apply(&mut doc).unwrap();

        assert_eq!(caret, Caret::new(1, 6));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_out_of_bounds_insert_rejected_without_mutation() {
        let mut doc = doc();
        let before = doc.clone();

        let err = Transaction::new(Caret::start_of(0))
            .insert(5, Node::new(NodeKind::Action, "a1"))
            .apply(&mut doc)
            .unwrap_err();

        assert_eq!(err, EditError::IndexOutOfBounds { index: 5, len: 2 });
        assert_eq!(doc, before);
    }

    #[test]
    fn test_later_ops_validated_against_replayed_length() {
        let mut doc = doc();
        let before = doc.clone();

        // Index 1 is in bounds now, but not after the two removes.
        let err = Transaction::new(Caret::start_of(0))
            .remove(0)
            .remove(1)
            .apply(&mut doc)
            .unwrap_err();

        assert_eq!(err, EditError::IndexOutOfBounds { index: 1, len: 1 });
        assert_eq!(doc, before);
    }

    #[test]
    fn test_emptying_script_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = Transaction::new(Caret::start_of(0))
            .remove(0)
            .replace(0, vec![])
            .apply(&mut doc)
            .unwrap_err();

        assert_eq!(err, EditError::WouldEmptyDocument);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_caret_past_final_length_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = Transaction::new(Caret::start_of(1))
            .remove(1)
            .apply(&mut doc)
            .unwrap_err();

        assert_eq!(err, EditError::CaretOutOfBounds { node: 1, len: 1 });
        assert_eq!(doc, before);
    }

    #[test]
    fn test_edit_script_serialization() {
        let transaction = Transaction::new(Caret::new(1, 0))
            .insert(1, Node::new(NodeKind::Dialogue, "d2"))
            .remove(0);

        let json = serde_json::to_string(&transaction).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(transaction, back);
    }

    #[test]
    fn test_replace_splices_multiple_nodes() {
        let mut doc = doc();

        Transaction::new(Caret::start_of(2))
            .replace(
                1,
                vec![
                    Node::new(NodeKind::Dialogue, "d1a").with_text("Hel"),
                    Node::new(NodeKind::Parenthetical, "p1").with_text("("),
                    Node::new(NodeKind::Dialogue, "d1b").with_text("lo."),
                ],
            )
            .apply(&mut doc)
            .unwrap();

        assert_eq!(
            doc.kinds(),
            vec![
                NodeKind::Character,
                NodeKind::Dialogue,
                NodeKind::Parenthetical,
                NodeKind::Dialogue,
            ]
        );
        assert_eq!(doc.children[1].collect_text(), "Hel");
        assert_eq!(doc.children[3].collect_text(), "lo.");
    }
}
