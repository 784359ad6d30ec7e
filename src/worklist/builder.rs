use chrono::{DateTime, Local};
use log::debug;

use crate::tip_types::tip_type_from_name;
use crate::tips::TipState;
use crate::wells::WellRef;

use super::command::{Opcode, TipMask, WorklistCommand};
use super::config::{check_field, check_line_text, TipMarkers, WorklistConfig};
use super::error::WorklistError;

/// An ordered, validated log of worklist commands.
///
/// Commands are only ever appended, and only through the operations below. Each
/// operation is all-or-nothing: when it returns an error the command log, the tip
/// state and the active batch are exactly as they were before the call.
#[derive(Debug, Clone)]
pub struct Worklist {
    pub(super) config: WorklistConfig,
    pub(super) created: DateTime<Local>,
    pub(super) tips: TipState,
    pub(super) active_batch: Vec<usize>,
    pub(super) tip_type: String,
    pub(super) commands: Vec<WorklistCommand>,
}

impl Worklist {
    /// Create an empty worklist; all channels start without tips
    pub fn new(config: WorklistConfig) -> Result<Self, WorklistError> {
        config.validate()?;
        Ok(Self {
            tips: TipState::new(config.channel_count, config.tip_replace),
            active_batch: (0..config.channel_count).collect(),
            tip_type: config.tip_type.clone(),
            created: Local::now(),
            commands: Vec::new(),
            config,
        })
    }

    /// Replace the creation timestamp written to the header
    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    /// Worklist name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configuration the worklist was built with
    pub fn config(&self) -> &WorklistConfig {
        &self.config
    }

    /// Creation timestamp, captured once at construction
    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    /// Read-only view of the command log, in execution order
    pub fn commands(&self) -> &[WorklistCommand] {
        &self.commands
    }

    /// Number of commands in the log
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no command has been appended
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current tip state
    pub fn tips(&self) -> &TipState {
        &self.tips
    }

    /// Channels addressed by operations that do not name a channel
    pub fn active_batch(&self) -> &[usize] {
        &self.active_batch
    }

    /// Tip type of the most recent pick-up, or the configured default
    pub fn tip_type(&self) -> &str {
        &self.tip_type
    }

    /// Run `op` and undo everything it did if it fails
    pub(super) fn transaction<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, WorklistError>,
    ) -> Result<T, WorklistError> {
        let len = self.commands.len();
        let tips = self.tips.clone();
        let active_batch = self.active_batch.clone();
        let tip_type = self.tip_type.clone();

        let result = op(self);
        if result.is_err() {
            self.commands.truncate(len);
            self.tips = tips;
            self.active_batch = active_batch;
            self.tip_type = tip_type;
        }
        result
    }

    fn push(&mut self, command: WorklistCommand) {
        debug!("[{}] {}", self.commands.len(), command);
        self.commands.push(command);
    }

    /// Mount tips on `channels` and make them the active batch.
    ///
    /// `tip_type` accepts full DiTi strings or short names such as `"fca 50 filtered"`.
    pub fn pick_up(&mut self, tip_type: Option<&str>, channels: &[usize]) -> Result<(), WorklistError> {
        self.transaction(|wl| {
            if channels.is_empty() {
                return Err(WorklistError::EmptyBatch("pick_up"));
            }
            if let Some(name) = tip_type {
                check_line_text("tip type", name)?;
            }

            wl.tips.pick_up(channels)?;
            wl.active_batch = channels.to_vec();
            if let Some(name) = tip_type.filter(|name| !name.trim().is_empty()) {
                wl.tip_type = tip_type_from_name(name);
            }
            debug!("Picked up {} on channel(s) {:?}", wl.tip_type, channels);

            if wl.config.tip_markers == TipMarkers::Emit {
                wl.push(WorklistCommand::wash(TipMask::from_channels(channels)));
            }
            Ok(())
        })
    }

    /// Aspirate `volumes[i]` from `wells[i]` of `rack_label` with `channels[i]`
    pub fn aspirate<W>(
        &mut self,
        rack_label: &str,
        wells: &[W],
        volumes: &[f64],
        liquid_class: Option<&str>,
        channels: &[usize],
    ) -> Result<(), WorklistError>
    where
        W: Clone + Into<WellRef>,
    {
        self.liquid(Opcode::Aspirate, rack_label, wells, volumes, liquid_class, channels)
    }

    /// Dispense `volumes[i]` into `wells[i]` of `rack_label` with `channels[i]`.
    ///
    /// Dispensed volumes are not checked against what was aspirated.
    pub fn dispense<W>(
        &mut self,
        rack_label: &str,
        wells: &[W],
        volumes: &[f64],
        liquid_class: Option<&str>,
        channels: &[usize],
    ) -> Result<(), WorklistError>
    where
        W: Clone + Into<WellRef>,
    {
        self.liquid(Opcode::Dispense, rack_label, wells, volumes, liquid_class, channels)
    }

    fn liquid<W>(
        &mut self,
        opcode: Opcode,
        rack_label: &str,
        wells: &[W],
        volumes: &[f64],
        liquid_class: Option<&str>,
        channels: &[usize],
    ) -> Result<(), WorklistError>
    where
        W: Clone + Into<WellRef>,
    {
        self.transaction(|wl| {
            if wells.len() != volumes.len() || wells.len() != channels.len() {
                return Err(WorklistError::ArityMismatch {
                    wells: wells.len(),
                    volumes: volumes.len(),
                    channels: channels.len(),
                });
            }
            if channels.is_empty() {
                return Err(WorklistError::EmptyBatch(if opcode == Opcode::Aspirate {
                    "aspirate"
                } else {
                    "dispense"
                }));
            }

            wl.tips.require_mounted(channels)?;

            let positions = wells
                .iter()
                .map(|well| wl.config.plate.position_of(&well.clone().into()))
                .collect::<Result<Vec<u32>, _>>()?;

            if let Some(&bad) = volumes.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(WorklistError::InvalidVolume(bad));
            }

            check_field("rack label", rack_label)?;
            let liquid_class = match liquid_class {
                Some(lc) if !lc.is_empty() => lc.to_string(),
                _ => wl.config.liquid_class.clone(),
            };
            check_field("liquid class", &liquid_class)?;

            for ((&position, &volume), &channel) in positions.iter().zip(volumes).zip(channels) {
                wl.push(WorklistCommand::liquid(
                    opcode,
                    rack_label,
                    position,
                    volume,
                    liquid_class.clone(),
                    TipMask::channel(channel),
                ));
            }
            Ok(())
        })
    }

    /// Eject tips from `channels`
    pub fn drop_tips(&mut self, channels: &[usize]) -> Result<(), WorklistError> {
        self.transaction(|wl| {
            if channels.is_empty() {
                return Err(WorklistError::EmptyBatch("drop_tips"));
            }
            wl.tips.drop_tips(channels)?;
            debug!("Dropped tips on channel(s) {:?}", channels);

            if wl.config.tip_markers == TipMarkers::Emit {
                wl.push(WorklistCommand::wash(TipMask::from_channels(channels)));
            }
            Ok(())
        })
    }

    /// Append a `W` line for every channel currently holding a tip
    pub fn wash_tips(&mut self) -> Result<(), WorklistError> {
        let mounted = self.tips.mounted_channels();
        if mounted.is_empty() {
            return Err(WorklistError::EmptyBatch("wash_tips"));
        }
        self.push(WorklistCommand::wash(TipMask::from_channels(&mounted)));
        Ok(())
    }

    /// Append a `C` line
    pub fn comment(&mut self, text: &str) -> Result<(), WorklistError> {
        check_line_text("comment", text)?;
        self.push(WorklistCommand::comment(text));
        Ok(())
    }

    /// Move `volume` from one well to another on the default channel.
    ///
    /// With `new_tip` set and no tip on the channel, the pair is wrapped in a pick-up
    /// and a drop. Without `new_tip` a tip must already be mounted.
    #[allow(clippy::too_many_arguments)]
    pub fn transfer(
        &mut self,
        source_rack: &str,
        source_well: impl Into<WellRef>,
        dest_rack: &str,
        dest_well: impl Into<WellRef>,
        volume: f64,
        liquid_class: Option<&str>,
        new_tip: bool,
    ) -> Result<(), WorklistError> {
        let source_well = source_well.into();
        let dest_well = dest_well.into();
        self.transaction(|wl| {
            let channel = [wl.config.default_channel];
            let fresh_tip = new_tip && !wl.tips.is_mounted(channel[0]);

            if fresh_tip {
                wl.pick_up(None, &channel)?;
            }
            wl.aspirate(source_rack, &[source_well], &[volume], liquid_class, &channel)?;
            wl.dispense(dest_rack, &[dest_well], &[volume], liquid_class, &channel)?;
            if fresh_tip {
                wl.drop_tips(&channel)?;
            }
            Ok(())
        })
    }

    /// Aspirate once and dispense into several wells on the default channel.
    ///
    /// The aspirate takes `total`, or the sum of `volume_per_well` when `total` is
    /// `None`. A tip must already be mounted.
    #[allow(clippy::too_many_arguments)]
    pub fn multi_dispense<W>(
        &mut self,
        source_rack: &str,
        source_well: impl Into<WellRef>,
        total: Option<f64>,
        dest_rack: &str,
        dest_wells: &[W],
        volume_per_well: &[f64],
        liquid_class: Option<&str>,
    ) -> Result<(), WorklistError>
    where
        W: Clone + Into<WellRef>,
    {
        let source_well = source_well.into();
        self.transaction(|wl| {
            if dest_wells.len() != volume_per_well.len() {
                return Err(WorklistError::ArityMismatch {
                    wells: dest_wells.len(),
                    volumes: volume_per_well.len(),
                    channels: 1,
                });
            }
            if dest_wells.is_empty() {
                return Err(WorklistError::EmptyBatch("multi_dispense"));
            }

            let required: f64 = volume_per_well.iter().sum();
            let total = total.unwrap_or(required);
            // Sums of decimal volumes carry rounding error; a total equal to the
            // intended sum must still pass.
            let tolerance = f64::EPSILON * required.abs().max(1.0) * volume_per_well.len() as f64;
            if total < required - tolerance {
                return Err(WorklistError::InsufficientVolume { total, required });
            }

            let channel = wl.config.default_channel;
            wl.aspirate(source_rack, &[source_well], &[total], liquid_class, &[channel])?;
            for (well, &volume) in dest_wells.iter().zip(volume_per_well) {
                wl.dispense(dest_rack, &[well.clone()], &[volume], liquid_class, &[channel])?;
            }
            Ok(())
        })
    }

    /// Transfer `transfer_volume` from each well to the next, with a fresh tip per step
    pub fn serial_dilution<W>(
        &mut self,
        rack_label: &str,
        wells: &[W],
        transfer_volume: f64,
        liquid_class: Option<&str>,
    ) -> Result<(), WorklistError>
    where
        W: Clone + Into<WellRef>,
    {
        self.transaction(|wl| {
            if wells.is_empty() {
                return Err(WorklistError::EmptyBatch("serial_dilution"));
            }
            for pair in wells.windows(2) {
                wl.transfer(
                    rack_label,
                    pair[0].clone(),
                    rack_label,
                    pair[1].clone(),
                    transfer_volume,
                    liquid_class,
                    true,
                )?;
            }
            Ok(())
        })
    }
}
