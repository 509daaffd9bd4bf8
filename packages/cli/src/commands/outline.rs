use anyhow::Result;
use clap::Args;
use colored::Colorize;
use slugline_document::{Node, NodeKind};
use slugline_structure::{build_projection, unwrap_document, ProjectionEntry};

use crate::commands::read_document;

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Document JSON file ('-' for stdin)
    pub input: String,
}

pub fn outline(args: OutlineArgs) -> Result<()> {
    let doc = read_document(&args.input)?;
    let flat = unwrap_document(&doc);
    let entries = build_projection(&flat);

    let groups = entries
        .iter()
        .filter(|entry| matches!(entry, ProjectionEntry::DialogueGroup { .. }))
        .count();
    println!(
        "{} {} top-level blocks, {} dialogue groups",
        "🎬 Outline:".bright_blue().bold(),
        flat.children.len(),
        groups
    );
    println!();

    for entry in &entries {
        match entry {
            ProjectionEntry::Block { index, node } => print_block(*index, node),
            ProjectionEntry::DialogueGroup {
                start,
                character,
                segments,
                ..
            } => {
                println!("{:>4}  {}", start, character.collect_text().bold());
                for segment in segments {
                    let text = segment.collect_text();
                    match segment.kind {
                        NodeKind::Parenthetical => println!("      {}", text.dimmed()),
                        _ => println!("      {}", text),
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_block(index: usize, node: &Node) {
    let text = node.collect_text();
    match node.kind {
        NodeKind::SceneHeading => println!("{:>4}  {}", index, text.bright_blue().bold()),
        NodeKind::Transition => println!("{:>4}  {}", index, text.yellow()),
        _ => println!(
            "{:>4}  {}  {}",
            index,
            text,
            format!("[{}]", node.kind.name()).dimmed()
        ),
    }
}
