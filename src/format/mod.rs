//! # Worklist file formats
//!
//! Both formats are rendered from the same command log, so they cannot disagree.
//!
//! ## GWL (Tecan generic worklist)
//!
//! One command per line, 11 `;`-separated fields with a fixed delimiter count:
//!
//! ```text
//! A;Plate;;;1;;100.0;Water Free Single;;1;
//! │ │       │  │     │                  │
//! │ │       │  │     │                  └ tip mask (bit i = channel i)
//! │ │       │  │     └ liquid class
//! │ │       │  └ volume (µL)
//! │ │       └ 1-based position
//! │ └ rack label
//! └ opcode: A, D, W
//! ```
//!
//! Comment lines are `C;<text>`. A header block of [`HEADER_LINES`] comment lines
//! precedes the commands.
//!
//! ## Tabular (CSV)
//!
//! A header row `Command,RackLabel,Position,Volume,LiquidClass,Comment` and one row
//! per command, quoted by the `csv` crate where needed.

mod error;
mod gwl;
mod tabular;


use serde::{Deserialize, Serialize};

use crate::worklist::WorklistCommand;

pub use error::FormatError;
pub use gwl::{gwl_line, parse_gwl, parse_header, write_gwl, GwlHeader, GWL_FIELDS, HEADER_LINES};
pub use tabular::{write_csv, CSV_HEADER};

/// Output format of a saved worklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorklistFormat {
    /// Tecan generic worklist
    #[default]
    Gwl,
    /// Comma-separated table
    Csv,
}

impl WorklistFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            WorklistFormat::Gwl => "gwl",
            WorklistFormat::Csv => "csv",
        }
    }
}

/// Render `commands` in `format`
pub fn serialize(
    header: &GwlHeader,
    commands: &[WorklistCommand],
    format: WorklistFormat,
) -> Result<String, FormatError> {
    match format {
        WorklistFormat::Gwl => Ok(write_gwl(header, commands)),
        WorklistFormat::Csv => write_csv(commands),
    }
}

/// Volume with at least one decimal place.
///
/// Integral values print as `100.0`; anything else uses the shortest text that parses
/// back to the same `f64`.
pub fn format_volume(volume: f64) -> String {
    if volume.is_finite() && volume.fract() == 0.0 {
        format!("{volume:.1}")
    } else {
        volume.to_string()
    }
}
