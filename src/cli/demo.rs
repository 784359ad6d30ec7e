use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use fluent_worklist::format::WorklistFormat;
use fluent_worklist::worklist::{Worklist, WorklistConfig};

/// Write a demo worklist: reagent fill of row A, then a 1:2 dilution series along it
pub fn run(output: PathBuf, format: WorklistFormat) -> Result<()> {
    info!("Building demo dilution series");

    let worklist = build_demo().context("Failed to build demo worklist")?;
    let path = worklist
        .save(&output, format)
        .with_context(|| format!("Failed to write worklist: {}", output.display()))?;

    println!("{}", worklist.summary());
    println!("Demo worklist written to {}", path.display());
    Ok(())
}

fn build_demo() -> Result<Worklist, fluent_worklist::worklist::WorklistError> {
    let mut wl = Worklist::new(WorklistConfig::fca("DilutionSeries"))?;
    let row_a: Vec<String> = (1..=12).map(|col| format!("A{col}")).collect();

    wl.comment("Fill row A with diluent")?;
    wl.pick_up(None, &[0])?;
    wl.multi_dispense(
        "Trough",
        "A1",
        None,
        "Plate",
        &row_a[1..],
        &[100.0; 11],
        None,
    )?;
    wl.drop_tips(&[0])?;

    wl.comment("Add stock to A1")?;
    wl.transfer("Stock", "A1", "Plate", "A1", 200.0, None, true)?;

    wl.comment("1:2 serial dilution A1 -> A12")?;
    wl.serial_dilution("Plate", &row_a, 100.0, None)?;

    Ok(wl)
}
