//! # Operation records
//!
//! One logical pipetting action as supplied by a caller's protocol. Records are a
//! closed set of variants tagged by `kind`, so a protocol can be written as JSON:
//!
//! ```json
//! [
//!   {"kind": "pick_up", "channel": 0},
//!   {"kind": "aspirate", "resource": "Plate", "well": "A1", "volume": 100.0, "channel": 0},
//!   {"kind": "dispense", "resource": "Plate", "well": "A2", "volume": 100.0, "channel": 0},
//!   {"kind": "drop", "channel": 0}
//! ]
//! ```
//!
//! A record without a `channel` applies to the active batch (the channels of the most
//! recent pick-up). See [`Worklist::apply`](crate::worklist::Worklist::apply).

use serde::{Deserialize, Serialize};

use crate::wells::WellRef;

/// One aspirate or dispense step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidStep {
    /// Rack label of the labware
    pub resource: String,
    /// Well to address
    pub well: WellRef,
    /// Volume in µL
    pub volume: f64,
    /// Liquid class override; the worklist default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_class: Option<String>,
    /// Channel index; absent means every channel of the active batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<usize>,
    /// Free text appended to the worklist as a comment line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl LiquidStep {
    /// Step on the active batch with the default liquid class
    pub fn new(resource: impl Into<String>, well: impl Into<WellRef>, volume: f64) -> Self {
        Self {
            resource: resource.into(),
            well: well.into(),
            volume,
            liquid_class: None,
            channel: None,
            comment: None,
        }
    }

    /// Address a single channel
    pub fn on_channel(mut self, channel: usize) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Override the liquid class
    pub fn with_liquid_class(mut self, liquid_class: impl Into<String>) -> Self {
        self.liquid_class = Some(liquid_class.into());
        self
    }
}

/// A single pipetting action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationRecord {
    /// Mount tips
    #[serde(alias = "pick_up_tips", alias = "pickup")]
    PickUp {
        /// Tip rack label, informational only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource: Option<String>,
        /// Tip rack well, informational only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        well: Option<WellRef>,
        /// Tip type override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tip_type: Option<String>,
        /// Channel index; absent means every channel of the head
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel: Option<usize>,
        /// Comment line to append
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },

    /// Draw liquid into mounted tips
    Aspirate(LiquidStep),

    /// Release liquid from mounted tips
    Dispense(LiquidStep),

    /// Eject tips
    #[serde(alias = "drop_tips")]
    Drop {
        /// Waste label, informational only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource: Option<String>,
        /// Channel index; absent means every channel of the active batch
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel: Option<usize>,
        /// Comment line to append
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

impl OperationRecord {
    /// Pick-up on a single channel
    pub fn pick_up(channel: usize) -> Self {
        Self::PickUp {
            resource: None,
            well: None,
            tip_type: None,
            channel: Some(channel),
            comment: None,
        }
    }

    /// Drop on a single channel
    pub fn drop_tips(channel: usize) -> Self {
        Self::Drop {
            resource: None,
            channel: Some(channel),
            comment: None,
        }
    }

    /// Short lowercase name of the record kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PickUp { .. } => "pick_up",
            Self::Aspirate(_) => "aspirate",
            Self::Dispense(_) => "dispense",
            Self::Drop { .. } => "drop",
        }
    }

    /// Explicit channel, if the record names one
    pub fn channel(&self) -> Option<usize> {
        match self {
            Self::PickUp { channel, .. } | Self::Drop { channel, .. } => *channel,
            Self::Aspirate(step) | Self::Dispense(step) => step.channel,
        }
    }

    /// Comment attached to the record
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::PickUp { comment, .. } | Self::Drop { comment, .. } => comment.as_deref(),
            Self::Aspirate(step) | Self::Dispense(step) => step.comment.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_protocol() {
        let json = r#"[
            {"kind": "pick_up_tips", "channel": 0, "tip_type": "fca 200"},
            {"kind": "aspirate", "resource": "Plate", "well": "A1", "volume": 100, "channel": 0},
            {"kind": "dispense", "resource": "Plate", "well": 8, "volume": 100.0},
            {"kind": "drop_tips"}
        ]"#;

        let records: Vec<OperationRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].kind(), "pick_up");
        assert_eq!(records[0].channel(), Some(0));
        assert_eq!(
            records[1],
            OperationRecord::Aspirate(LiquidStep::new("Plate", "A1", 100.0).on_channel(0))
        );
        match &records[2] {
            OperationRecord::Dispense(step) => {
                assert_eq!(step.well, WellRef::Offset(8));
                assert_eq!(step.channel, None);
            }
            other => panic!("unexpected record {other:?}"),
        }
        assert_eq!(records[3].kind(), "drop");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<OperationRecord, _> =
            serde_json::from_str(r#"{"kind": "mix", "resource": "Plate"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_liquid_step_requires_volume() {
        let result: Result<OperationRecord, _> =
            serde_json::from_str(r#"{"kind": "aspirate", "resource": "Plate", "well": "A1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_canonical_kind() {
        let json = serde_json::to_string(&OperationRecord::drop_tips(3)).unwrap();
        assert_eq!(json, r#"{"kind":"drop","channel":3}"#);
    }
}
