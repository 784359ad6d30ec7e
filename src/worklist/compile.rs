use log::{debug, info};

use crate::operation::{LiquidStep, OperationRecord};

use super::builder::Worklist;
use super::config::WorklistConfig;
use super::command::Opcode;
use super::error::{CompileError, WorklistError};

impl Worklist {
    /// Apply one operation record.
    ///
    /// Records without a channel address the active batch; liquid steps are then
    /// broadcast, every channel of the batch hitting the same well with the same
    /// volume. A record's comment is appended as a `C` line after its commands.
    pub fn apply(&mut self, record: OperationRecord) -> Result<(), WorklistError> {
        debug!("Applying {} record", record.kind());
        self.transaction(|wl| {
            let comment = record.comment().map(str::to_string);

            match record {
                OperationRecord::PickUp {
                    tip_type, channel, ..
                } => {
                    let channels = match channel {
                        Some(channel) => vec![channel],
                        None => (0..wl.tips.channel_count()).collect(),
                    };
                    wl.pick_up(tip_type.as_deref(), &channels)?;
                }
                OperationRecord::Aspirate(step) => wl.apply_step(Opcode::Aspirate, step)?,
                OperationRecord::Dispense(step) => wl.apply_step(Opcode::Dispense, step)?,
                OperationRecord::Drop { channel, .. } => {
                    let channels = wl.batch_for(channel);
                    wl.drop_tips(&channels)?;
                }
            }

            if let Some(text) = comment {
                wl.comment(&text)?;
            }
            Ok(())
        })
    }

    /// Apply records in order, stopping at the first rejected one.
    ///
    /// Records before the rejected one stay applied; the rejected record itself
    /// leaves no trace.
    pub fn apply_all(
        &mut self,
        records: impl IntoIterator<Item = OperationRecord>,
    ) -> Result<(), CompileError> {
        for (index, record) in records.into_iter().enumerate() {
            let kind = record.kind();
            self.apply(record)
                .map_err(|source| CompileError::Operation { index, kind, source })?;
        }
        Ok(())
    }

    fn apply_step(&mut self, opcode: Opcode, step: LiquidStep) -> Result<(), WorklistError> {
        let channels = self.batch_for(step.channel);
        let wells = vec![step.well; channels.len()];
        let volumes = vec![step.volume; channels.len()];
        let liquid_class = step.liquid_class.as_deref();

        match opcode {
            Opcode::Aspirate => self.aspirate(&step.resource, &wells, &volumes, liquid_class, &channels),
            _ => self.dispense(&step.resource, &wells, &volumes, liquid_class, &channels),
        }
    }

    fn batch_for(&self, channel: Option<usize>) -> Vec<usize> {
        match channel {
            Some(channel) => vec![channel],
            None => self.active_batch.clone(),
        }
    }
}

/// Compile a stream of operation records into a new worklist
pub fn compile(
    records: impl IntoIterator<Item = OperationRecord>,
    config: WorklistConfig,
) -> Result<Worklist, CompileError> {
    let mut worklist = Worklist::new(config).map_err(CompileError::Config)?;
    worklist.apply_all(records)?;
    info!(
        "Compiled worklist '{}' with {} commands",
        worklist.name(),
        worklist.len()
    );
    Ok(worklist)
}
