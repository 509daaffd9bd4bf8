use anyhow::Result;
use clap::{Args, ValueEnum};
use slugline_structure::rename_types;
use std::path::PathBuf;

use crate::commands::{read_json, write_json};

/// The two interchangeable spellings of the generic text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Spelling {
    General,
    Paragraph,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Document JSON file ('-' for stdin)
    pub input: String,

    /// Spelling to rewrite generic text blocks to
    #[arg(long, value_enum)]
    pub to: Spelling,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Runs on the raw JSON so documents from consumers with extra fields pass
/// through byte-for-byte apart from the rewritten tags.
pub fn rename(args: RenameArgs) -> Result<()> {
    let value = read_json(&args.input)?;
    let (from, to) = match args.to {
        Spelling::General => ("paragraph", "general"),
        Spelling::Paragraph => ("general", "paragraph"),
    };
    let renamed = rename_types(&value, from, to);
    write_json(&renamed, args.output.as_deref(), args.pretty)
}
