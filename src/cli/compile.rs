use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use fluent_worklist::format::WorklistFormat;
use fluent_worklist::operation::OperationRecord;
use fluent_worklist::worklist::{compile, Worklist};

use super::config::Config;
use super::WorklistArgs;

/// Compile a JSON protocol file and save the worklist
pub fn run(
    protocol: PathBuf,
    output: Option<PathBuf>,
    format: Option<WorklistFormat>,
    args: WorklistArgs,
) -> Result<()> {
    let config = Config::load(&args)?;
    let format = format.or(config.output.format).unwrap_or_default();

    let worklist = compile_protocol(&protocol, &config, &args)?;

    let output = output.unwrap_or_else(|| protocol.with_extension(format.extension()));
    let path = worklist
        .save(&output, format)
        .with_context(|| format!("Failed to write worklist: {}", output.display()))?;

    println!("{}", worklist.summary());
    println!("Saved {} worklist to {}", format.extension().to_uppercase(), path.display());
    Ok(())
}

/// Read a JSON array of operation records and compile it
pub fn compile_protocol(protocol: &Path, config: &Config, args: &WorklistArgs) -> Result<Worklist> {
    let content = fs::read_to_string(protocol)
        .with_context(|| format!("Failed to read protocol: {}", protocol.display()))?;
    let records: Vec<OperationRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse protocol: {}", protocol.display()))?;

    let default_name = protocol
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Worklist");
    let worklist_config = config.worklist_config(args, default_name);

    info!(
        "Compiling {} records from {} ({} channels)",
        records.len(),
        protocol.display(),
        worklist_config.channel_count
    );

    compile(records, worklist_config)
        .with_context(|| format!("Failed to compile protocol: {}", protocol.display()))
}
