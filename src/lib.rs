//! # fluent-worklist - Pipetting Operations to Tecan Worklists
//!
//! `fluent_worklist` compiles abstract pipetting operations (pick up tips, aspirate,
//! dispense, drop tips) into the positional command files read by Tecan Fluent
//! control software, and can drive the same commands one at a time through a
//! hardware binding.
//!
//! ## Key Features
//!
//! - **Stateful Validation**: Tracks which channels hold tips and rejects aspirates
//!   without tips, double pick-ups and malformed batches before anything is written.
//!
//! - **All-or-Nothing Operations**: A rejected call leaves the worklist untouched.
//!
//! - **Multi-Channel Batches**: One operation on N channels expands to N command
//!   lines, each masked to its channel.
//!
//! - **Two Output Formats**: Tecan GWL with a fixed field count per line, and a
//!   simple CSV table, both rendered from the same command log.
//!
//! - **Ordered Execution**: Commands are submitted to an [`executor::Executor`]
//!   strictly in order, with cancellation and no automatic retry.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fluent_worklist::prelude::*;
//!
//! let mut wl = Worklist::new(WorklistConfig::fca("DilutionSeries"))?;
//!
//! wl.pick_up(None, &[0])?;
//! wl.aspirate("Plate", &["A1"], &[100.0], None, &[0])?;
//! wl.dispense("Plate", &["A2"], &[100.0], None, &[0])?;
//! wl.drop_tips(&[0])?;
//!
//! wl.save("worklists/dilution.gwl", WorklistFormat::Gwl)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! which writes
//!
//! ```text
//! C;Worklist: DilutionSeries
//! C;Created: 2024-03-01 09:30:00
//! C;Liquid class: Water Free Single
//! C;Tip type: TOOLTYPE:LiHa.TecanDiTi/TOOLNAME:FCA, 200ul
//! C;Commands: 2
//! C;
//! A;Plate;;;1;;100.0;Water Free Single;;1;
//! D;Plate;;;9;;100.0;Water Free Single;;1;
//! ```
//!
//! ## Compiling a Protocol
//!
//! Protocols can also be supplied as a list of [`operation::OperationRecord`]s, for
//! example deserialized from JSON:
//!
//! ```rust
//! use fluent_worklist::prelude::*;
//!
//! let records: Vec<OperationRecord> = serde_json::from_str(r#"[
//!     {"kind": "pick_up", "channel": 0},
//!     {"kind": "aspirate", "resource": "Trough", "well": "A1", "volume": 50.0},
//!     {"kind": "dispense", "resource": "Plate", "well": "B1", "volume": 50.0},
//!     {"kind": "drop"}
//! ]"#)?;
//!
//! let wl = compile(records, WorklistConfig::fca("FromJson"))?;
//! assert_eq!(wl.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`wells`]: Well name ⇄ column-major offset conversion and plate layouts
//! - [`operation`]: Input operation records
//! - [`tips`]: Per-channel tip state
//! - [`worklist`]: The builder, the protocol compiler and output commands
//! - [`format`]: GWL and CSV rendering, GWL parsing
//! - [`executor`]: Ordered live execution
//! - [`validator`]: Integrity checks for saved worklists
//! - [`tip_types`], [`constants`]: Tip-type and liquid-class catalogue, defaults

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod executor;
pub mod format;
pub mod operation;
pub mod tip_types;
pub mod tips;
pub mod validator;
pub mod wells;
pub mod worklist;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::executor::{
        Ack, CancelHandle, Cancellation, ExecutionError, ExecutionFailure, ExecutionReport,
        Executor, SimulatedExecutor,
    };
    pub use crate::format::{parse_gwl, parse_header, FormatError, GwlHeader, WorklistFormat};
    pub use crate::operation::{LiquidStep, OperationRecord};
    pub use crate::tips::{TipError, TipReplacePolicy, TipState};
    pub use crate::validator::{validate_worklist_file, ValidationReport};
    pub use crate::wells::{name_to_offset, offset_to_name, PlateLayout, WellError, WellRef};
    pub use crate::worklist::{
        compile, CompileError, Opcode, TipMarkers, TipMask, Worklist, WorklistCommand,
        WorklistConfig, WorklistError, WorklistSummary,
    };
}
