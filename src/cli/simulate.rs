use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use fluent_worklist::executor::{Cancellation, SimulatedExecutor};

use super::compile::compile_protocol;
use super::config::Config;
use super::WorklistArgs;

/// Compile a protocol and run it through the simulated executor
pub fn run(protocol: PathBuf, delay_ms: u64, args: WorklistArgs) -> Result<()> {
    let config = Config::load(&args)?;
    let worklist = compile_protocol(&protocol, &config, &args)?;

    info!("Simulating '{}' ({} commands)", worklist.name(), worklist.len());

    let mut executor = SimulatedExecutor::new().with_delay(Duration::from_millis(delay_ms));
    let report = worklist
        .execute(&mut executor, &Cancellation::never())
        .context("Simulated execution halted")?;

    for (i, command) in executor.executed().iter().enumerate() {
        println!("  {:>4}. {}", i + 1, command);
    }
    println!(
        "Executed {} commands ({} comments skipped)",
        report.executed, report.skipped
    );
    Ok(())
}
