//! Ready-made worklists for common plate operations.

use crate::wells::WellRef;

use super::builder::Worklist;
use super::config::WorklistConfig;
use super::error::WorklistError;

/// Copy `volume` from each well of `source_plate` to the same well of `dest_plate`.
///
/// Uses `wells` when given, otherwise the first `well_count` wells of the configured
/// plate in column-major order. Every well gets a fresh tip on the default channel.
pub fn plate_transfer(
    config: WorklistConfig,
    source_plate: &str,
    dest_plate: &str,
    volume: f64,
    wells: Option<&[WellRef]>,
    well_count: usize,
) -> Result<Worklist, WorklistError> {
    let config = if config.name == WorklistConfig::default().name {
        config.with_name(format!("Transfer_{source_plate}_to_{dest_plate}"))
    } else {
        config
    };
    let mut worklist = Worklist::new(config)?;

    let wells: Vec<WellRef> = match wells {
        Some(wells) => wells.to_vec(),
        None => worklist
            .config()
            .plate
            .well_names()
            .take(well_count)
            .map(WellRef::from)
            .collect(),
    };

    worklist.comment(&format!("Transfer from {source_plate} to {dest_plate}"))?;
    for well in wells {
        worklist.transfer(source_plate, well.clone(), dest_plate, well, volume, None, true)?;
    }
    Ok(worklist)
}

/// Add `volume` of one reagent to every destination well with a single aspirate.
///
/// The tip is picked up before the aspirate and dropped after the last dispense.
pub fn reagent_addition(
    config: WorklistConfig,
    reagent_source: &str,
    reagent_well: impl Into<WellRef>,
    dest_plate: &str,
    dest_wells: &[WellRef],
    volume: f64,
) -> Result<Worklist, WorklistError> {
    let config = if config.name == WorklistConfig::default().name {
        config.with_name(format!("ReagentAddition_{dest_plate}"))
    } else {
        config
    };
    let mut worklist = Worklist::new(config)?;
    let channel = [worklist.config().default_channel];

    worklist.comment(&format!("Add reagent from {reagent_source} to {dest_plate}"))?;
    worklist.pick_up(None, &channel)?;
    worklist.multi_dispense(
        reagent_source,
        reagent_well,
        None,
        dest_plate,
        dest_wells,
        &vec![volume; dest_wells.len()],
        None,
    )?;
    worklist.drop_tips(&channel)?;
    Ok(worklist)
}
