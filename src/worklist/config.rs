use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DITI_TYPE, DEFAULT_LIQUID_CLASS, FCA_CHANNELS, MAX_CHANNELS, MCA_CHANNELS};
use crate::tip_types::mca;
use crate::tips::TipReplacePolicy;
use crate::wells::PlateLayout;

use super::error::WorklistError;

/// Whether pick-up and drop leave a `W` marker in the command log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipMarkers {
    /// Tip changes produce no command; the log holds only liquid handling
    #[default]
    Omit,
    /// Pick-up and drop each append a `W` line masked to their channels
    Emit,
}

/// Configuration for a worklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorklistConfig {
    /// Worklist name, written to the header
    pub name: String,

    /// Liquid class used when an operation does not name one
    pub liquid_class: String,

    /// DiTi type label, written to the header
    pub tip_type: String,

    /// Channels on the pipetting head (1..=128)
    pub channel_count: usize,

    /// Plate dimensions used to resolve well names
    pub plate: PlateLayout,

    /// Behaviour of a pick-up on a channel that already holds a tip
    pub tip_replace: TipReplacePolicy,

    /// Tip-change marker lines
    pub tip_markers: TipMarkers,

    /// Channel used by single-channel helpers such as `transfer`
    pub default_channel: usize,
}

impl Default for WorklistConfig {
    fn default() -> Self {
        Self {
            name: "Worklist".to_string(),
            liquid_class: DEFAULT_LIQUID_CLASS.to_string(),
            tip_type: DEFAULT_DITI_TYPE.to_string(),
            channel_count: FCA_CHANNELS,
            plate: PlateLayout::plate_96(),
            tip_replace: TipReplacePolicy::Reject,
            tip_markers: TipMarkers::Omit,
            default_channel: 0,
        }
    }
}

impl WorklistConfig {
    /// 8-channel Fixed Channel Arm on a 96-well plate
    pub fn fca(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 96-channel Multi-Channel Arm with MCA tips
    pub fn mca(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tip_type: mca::DEFAULT.to_string(),
            channel_count: MCA_CHANNELS,
            ..Default::default()
        }
    }

    /// Set the worklist name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the default liquid class
    pub fn with_liquid_class(mut self, liquid_class: impl Into<String>) -> Self {
        self.liquid_class = liquid_class.into();
        self
    }

    /// Set the default tip type
    pub fn with_tip_type(mut self, tip_type: impl Into<String>) -> Self {
        self.tip_type = tip_type.into();
        self
    }

    /// Set the head size
    pub fn with_channel_count(mut self, channel_count: usize) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Set the plate layout
    pub fn with_plate(mut self, plate: PlateLayout) -> Self {
        self.plate = plate;
        self
    }

    /// Set the tip replace policy
    pub fn with_tip_replace(mut self, policy: TipReplacePolicy) -> Self {
        self.tip_replace = policy;
        self
    }

    /// Set whether tip changes leave `W` markers
    pub fn with_tip_markers(mut self, markers: TipMarkers) -> Self {
        self.tip_markers = markers;
        self
    }

    /// Set the channel used by single-channel helpers
    pub fn with_default_channel(mut self, channel: usize) -> Self {
        self.default_channel = channel;
        self
    }

    /// Check ranges and text fields
    pub fn validate(&self) -> Result<(), WorklistError> {
        if self.channel_count == 0 || self.channel_count > MAX_CHANNELS {
            return Err(WorklistError::InvalidConfig(format!(
                "channel count {} is outside 1..={}",
                self.channel_count, MAX_CHANNELS
            )));
        }
        if self.default_channel >= self.channel_count {
            return Err(WorklistError::InvalidConfig(format!(
                "default channel {} is outside a {}-channel head",
                self.default_channel, self.channel_count
            )));
        }
        self.plate.validate()?;

        check_line_text("worklist name", &self.name)?;
        check_line_text("tip type", &self.tip_type)?;
        check_field("liquid class", &self.liquid_class)?;
        Ok(())
    }
}

/// Reject text that would split a line
pub(crate) fn check_line_text(field: &'static str, value: &str) -> Result<(), WorklistError> {
    if value.contains(['\r', '\n']) {
        return Err(WorklistError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Reject text that would split a line or shift the `;`-separated fields
pub(crate) fn check_field(field: &'static str, value: &str) -> Result<(), WorklistError> {
    if value.contains([';', '\r', '\n']) {
        return Err(WorklistError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
