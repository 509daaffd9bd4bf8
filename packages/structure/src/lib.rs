//! # Slugline Structure
//!
//! Structural transforms over the document model:
//!
//! - **Canonicalizer**: `unwrap` to the flat editing form, `inflate` to the
//!   nested interchange form with explicit dialogue composites
//! - **Projection builder**: derives the grouped outline read model from a
//!   flat document in one pass, borrowing instead of copying
//! - **Type renaming**: raw-JSON tag migration for legacy interchange files
//!
//! All transforms are pure functions; the flat document remains the single
//! source of truth throughout.

pub mod canonical;
pub mod projection;
pub mod rename;

pub use canonical::{inflate_document, unwrap_document};
pub use projection::{build_projection, ProjectionEntry};
pub use rename::rename_types;
