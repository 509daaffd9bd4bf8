//! # Slugline Document Model
//!
//! The typed-block vocabulary and flat document shape for screenplay
//! editing.
//!
//! A screenplay is a flat sequence of typed blocks — scene headings, action,
//! characters, dialogue, parentheticals, transitions and generic text. This
//! crate owns that vocabulary:
//!
//! - [`NodeKind`]: the closed kind set (seven flat kinds plus the two
//!   composite wrappers used by the nested form)
//! - [`Node`] / [`Document`]: the tree values exchanged with the editing
//!   surface, serde-serializable for JSON interchange
//! - [`TextRun`] / [`Mark`]: inline text with formatting, plus the
//!   byte-offset split helpers structural edits are built from
//! - [`IdGenerator`]: stable per-document node ids
//!
//! Derived representations (canonical/nested forms, projections) live in
//! `slugline-structure`; interactive editing lives in `slugline-editor`.

pub mod id;
pub mod node;
pub mod text;

pub use id::{document_seed, IdGenerator};
pub use node::{Document, Node, NodeKind};
pub use text::{clamp_offset, push_text, runs_len, split_runs, Mark, TextRun};
