//! # Edit Session
//!
//! Owns a document plus the id generator that mints ids for blocks the
//! flow machine creates, and counts handled keys so hosts know when their
//! cached derived views went stale.

use slugline_document::{Document, IdGenerator};

use crate::caret::Selection;
use crate::flow::{self, KeyOutcome};
use crate::key::KeyEvent;
use crate::transaction::EditError;

/// Single-user editing session over one flat document.
#[derive(Debug)]
pub struct EditSession {
    /// Session identifier, also the id-generation key.
    pub id: String,

    /// The live flat document.
    pub document: Document,

    /// Incremented once per handled key. Projections or nested forms cached
    /// against an older version must be recomputed.
    pub version: u64,

    ids: IdGenerator,
}

impl EditSession {
    /// Fresh session over a new single-block document.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut ids = IdGenerator::new(&id);
        let document = Document::new(&mut ids);
        Self {
            id,
            document,
            version: 0,
            ids,
        }
    }

    /// Session over an existing document.
    ///
    /// The session id doubles as the id-generation key, so resuming over a
    /// document whose ids were minted earlier should use a fresh session id
    /// to keep new block ids distinct.
    pub fn from_document(id: impl Into<String>, document: Document) -> Self {
        let id = id.into();
        let ids = IdGenerator::new(&id);
        Self {
            id,
            document,
            version: 0,
            ids,
        }
    }

    /// Offer a key event to the flow machine. Bumps the version exactly
    /// when the key was handled.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        selection: &Selection,
    ) -> Result<KeyOutcome, EditError> {
        let outcome = flow::handle_key(&mut self.document, &mut self.ids, event, selection)?;
        if outcome.is_handled() {
            self.version += 1;
        }
        Ok(outcome)
    }
}
