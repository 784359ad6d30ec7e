use anyhow::{Context, Result};
use std::path::PathBuf;

use fluent_worklist::format::{parse_gwl, parse_header};
use fluent_worklist::worklist::WorklistSummary;

/// Print the header, the command listing and a summary of a GWL file
pub fn run(file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read worklist: {}", file.display()))?;

    let header = parse_header(&text);
    let commands =
        parse_gwl(&text).with_context(|| format!("Failed to parse worklist: {}", file.display()))?;

    let name = header.name.clone().unwrap_or_else(|| file.display().to_string());

    println!("Worklist: {}", name);
    if let Some(created) = header.created {
        println!("Created: {}", created);
    }
    if let Some(liquid_class) = &header.liquid_class {
        println!("Liquid class: {}", liquid_class);
    }
    if let Some(tip_type) = &header.tip_type {
        println!("Tip type: {}", tip_type);
    }

    println!("{}", "=".repeat(60));
    for (i, command) in commands.iter().enumerate() {
        println!("  {:>4}. {}", i + 1, command);
    }
    println!("{}", "=".repeat(60));

    println!("{}", WorklistSummary::from_commands(name, &commands));
    Ok(())
}
