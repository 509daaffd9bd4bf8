use anyhow::Result;
use clap::Args;
use slugline_structure::inflate_document;
use std::path::PathBuf;

use crate::commands::{read_document, write_json};

#[derive(Debug, Args)]
pub struct InflateArgs {
    /// Document JSON file ('-' for stdin)
    pub input: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn inflate(args: InflateArgs) -> Result<()> {
    let doc = read_document(&args.input)?;
    let nested = inflate_document(&doc);
    write_json(&nested, args.output.as_deref(), args.pretty)
}
