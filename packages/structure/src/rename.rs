//! Type-tag migration over raw document JSON.
//!
//! Operates on [`serde_json::Value`] rather than typed nodes so that
//! interchange files using older tag vocabularies (e.g. `paragraph`) can be
//! migrated without first parsing them into the closed [`NodeKind`] set.
//!
//! [`NodeKind`]: slugline_document::NodeKind

use serde_json::Value;
use tracing::instrument;

/// Rewrite every node type tag equal to `from` into `to`.
///
/// Recursion follows the document structure only: the `type` field of an
/// object is rewritten, and its `children` (or legacy `content`) array is
/// descended into. Everything else, ids and attrs included, is copied
/// verbatim, so an attr that happens to contain the string `from` or a key
/// named `type` is left alone.
#[instrument(skip(value))]
pub fn rename_types(value: &Value, from: &str, to: &str) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, entry) in map {
                let rewritten = match key.as_str() {
                    "type" if entry.as_str() == Some(from) => Value::String(to.to_string()),
                    "children" | "content" => rename_types(entry, from, to),
                    _ => entry.clone(),
                };
                out.insert(key.clone(), rewritten);
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| rename_types(item, from, to)).collect())
        }
        other => other.clone(),
    }
}
