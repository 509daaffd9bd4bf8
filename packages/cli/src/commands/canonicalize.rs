use anyhow::Result;
use clap::Args;
use slugline_structure::unwrap_document;
use std::path::PathBuf;

use crate::commands::{read_document, write_json};

#[derive(Debug, Args)]
pub struct CanonicalizeArgs {
    /// Document JSON file ('-' for stdin)
    pub input: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn canonicalize(args: CanonicalizeArgs) -> Result<()> {
    let doc = read_document(&args.input)?;
    let flat = unwrap_document(&doc);
    write_json(&flat, args.output.as_deref(), args.pretty)
}
