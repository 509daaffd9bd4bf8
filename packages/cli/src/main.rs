mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    canonicalize, inflate, outline, rename, CanonicalizeArgs, InflateArgs, OutlineArgs, RenameArgs,
};

/// Slugline - structural tools for screenplay documents
#[derive(Parser, Debug)]
#[command(name = "slugline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a screenplay outline from the grouped projection
    Outline(OutlineArgs),

    /// Reduce a document to the flat canonical form
    Canonicalize(CanonicalizeArgs),

    /// Materialize dialogue groups as nested composite blocks
    Inflate(InflateArgs),

    /// Rewrite generic text blocks between the general/paragraph spellings
    Rename(RenameArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Outline(args) => outline(args),
        Command::Canonicalize(args) => canonicalize(args),
        Command::Inflate(args) => inflate(args),
        Command::Rename(args) => rename(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
