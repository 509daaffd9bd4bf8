pub mod canonicalize;
pub mod inflate;
pub mod outline;
pub mod rename;

pub use canonicalize::{canonicalize, CanonicalizeArgs};
pub use inflate::{inflate, InflateArgs};
pub use outline::{outline, OutlineArgs};
pub use rename::{rename, RenameArgs};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use slugline_document::Document;
use std::io::Read;
use std::path::Path;

/// Read an input argument, with `-` meaning stdin.
fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn display_name(input: &str) -> &str {
    if input == "-" {
        "stdin"
    } else {
        input
    }
}

/// Parse a document, rejecting unknown node type names.
pub(crate) fn read_document(input: &str) -> Result<Document> {
    let source = read_source(input)?;
    serde_json::from_str(&source)
        .with_context(|| format!("Invalid document JSON in {}", display_name(input)))
}

/// Read the input as raw JSON, for passes that run before parsing into the
/// typed model.
pub(crate) fn read_json(input: &str) -> Result<serde_json::Value> {
    let source = read_source(input)?;
    serde_json::from_str(&source)
        .with_context(|| format!("Invalid JSON in {}", display_name(input)))
}

/// Serialize to the output file, or stdout when none is given.
pub(crate) fn write_json<T: Serialize>(
    value: &T,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
