use std::fmt;

use serde::{Deserialize, Serialize};

/// Worklist line opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// `A`: aspirate
    #[serde(rename = "A")]
    Aspirate,
    /// `D`: dispense
    #[serde(rename = "D")]
    Dispense,
    /// `W`: wash or tip-change marker
    #[serde(rename = "W")]
    Wash,
    /// `C`: comment
    #[serde(rename = "C")]
    Comment,
}

impl Opcode {
    /// Single-letter code used in worklist files
    pub fn code(self) -> &'static str {
        match self {
            Opcode::Aspirate => "A",
            Opcode::Dispense => "D",
            Opcode::Wash => "W",
            Opcode::Comment => "C",
        }
    }

    /// Inverse of [`Opcode::code`]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Opcode::Aspirate),
            "D" => Some(Opcode::Dispense),
            "W" => Some(Opcode::Wash),
            "C" => Some(Opcode::Comment),
            _ => None,
        }
    }

    /// Whether the opcode moves liquid
    pub fn is_liquid(self) -> bool {
        matches!(self, Opcode::Aspirate | Opcode::Dispense)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Set of channels a command applies to; bit `i` is channel `i`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipMask(u128);

impl TipMask {
    /// No channels
    pub const EMPTY: TipMask = TipMask(0);

    /// Wrap a raw bitmask
    pub fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    /// Mask for a single channel; channels beyond 127 give an empty mask
    pub fn channel(channel: usize) -> Self {
        let bit = u32::try_from(channel)
            .ok()
            .and_then(|shift| 1u128.checked_shl(shift))
            .unwrap_or(0);
        Self(bit)
    }

    /// Mask covering every listed channel
    pub fn from_channels(channels: &[usize]) -> Self {
        channels
            .iter()
            .fold(Self::EMPTY, |mask, &c| Self(mask.0 | Self::channel(c).0))
    }

    /// Raw bitmask
    pub fn bits(self) -> u128 {
        self.0
    }

    /// True when no channel is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set channels, ascending
    pub fn channels(self) -> impl Iterator<Item = usize> {
        (0..128usize).filter(move |&c| self.0 & (1u128 << c) != 0)
    }
}

impl fmt::Display for TipMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One positional command line of a worklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorklistCommand {
    /// Line opcode
    pub opcode: Opcode,
    /// Rack label, empty for `W` and `C`
    pub rack_label: String,
    /// 1-based column-major well position
    pub position: Option<u32>,
    /// Volume in µL
    pub volume: Option<f64>,
    /// Liquid class, empty for `W` and `C`
    pub liquid_class: String,
    /// Channels the line applies to
    pub tip_mask: TipMask,
    /// Comment text; only `C` lines carry one in the vendor format
    pub comment: Option<String>,
}

impl WorklistCommand {
    /// Aspirate or dispense line
    pub fn liquid(
        opcode: Opcode,
        rack_label: impl Into<String>,
        position: u32,
        volume: f64,
        liquid_class: impl Into<String>,
        tip_mask: TipMask,
    ) -> Self {
        Self {
            opcode,
            rack_label: rack_label.into(),
            position: Some(position),
            volume: Some(volume),
            liquid_class: liquid_class.into(),
            tip_mask,
            comment: None,
        }
    }

    /// Wash / tip-change marker
    pub fn wash(tip_mask: TipMask) -> Self {
        Self {
            opcode: Opcode::Wash,
            rack_label: String::new(),
            position: None,
            volume: None,
            liquid_class: String::new(),
            tip_mask,
            comment: None,
        }
    }

    /// Comment line
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            opcode: Opcode::Comment,
            rack_label: String::new(),
            position: None,
            volume: None,
            liquid_class: String::new(),
            tip_mask: TipMask::EMPTY,
            comment: Some(text.into()),
        }
    }

    /// Whether the command has a physical effect
    pub fn is_physical(&self) -> bool {
        self.opcode != Opcode::Comment
    }
}

impl fmt::Display for WorklistCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::Comment => write!(f, "# {}", self.comment.as_deref().unwrap_or_default()),
            Opcode::Wash => write!(f, "WASH tips (mask {})", self.tip_mask),
            Opcode::Aspirate | Opcode::Dispense => {
                let verb = if self.opcode == Opcode::Aspirate {
                    "ASPIRATE"
                } else {
                    "DISPENSE"
                };
                write!(
                    f,
                    "{} {} µL {} {} pos {} [{}] (mask {})",
                    verb,
                    self.volume.map(crate::format::format_volume).unwrap_or_default(),
                    if self.opcode == Opcode::Aspirate { "from" } else { "to" },
                    self.rack_label,
                    self.position.map(|p| p.to_string()).unwrap_or_default(),
                    self.liquid_class,
                    self.tip_mask
                )
            }
        }
    }
}
