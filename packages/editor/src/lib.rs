//! # Slugline Editor
//!
//! The flow-editing engine for flat screenplay documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host surface: key events + selection        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: flow state machine                  │
//! │  - gate: composition / collapsed caret /    │
//! │    flow block kinds                         │
//! │  - plan a transaction per key               │
//! │  - commit atomically or decline             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ structure: unwrap / inflate / projection    │
//! │ (derived views, recomputed after each edit) │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The flat document is the source of truth**: nested form and
//!    projection are derived views
//! 2. **One transaction per key event**: validated in full, committed
//!    atomically, or not at all
//! 3. **Declining is not an error**: unmet preconditions hand the key back
//!    to the host's default behavior
//! 4. **Never empty**: no path may leave the document with zero top-level
//!    nodes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slugline_editor::{Caret, EditSession, Key, KeyEvent, KeyOutcome, Selection};
//!
//! let mut session = EditSession::new("draft-1");
//!
//! // Caret at the end of a character cue; Enter starts their dialogue.
//! let selection = Selection::Caret(Caret::new(0, 4));
//! let outcome = session.handle_key(&KeyEvent::new(Key::Enter), &selection)?;
//!
//! if let KeyOutcome::Handled { caret } = outcome {
//!     // move the host selection to `caret`
//! }
//! ```

mod caret;
mod flow;
mod key;
mod session;
mod transaction;

pub use caret::{Caret, Selection};
pub use flow::{handle_key, KeyOutcome};
pub use key::{Key, KeyEvent};
pub use session::EditSession;
pub use transaction::{EditError, EditOp, Transaction};

// Re-export the model types hosts handle alongside the editor.
pub use slugline_document::{Document, IdGenerator, Node, NodeKind};
