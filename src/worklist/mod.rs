//! # Worklist builder
//!
//! Turns pipetting operations into an ordered log of positional commands.
//!
//! ## Design
//!
//! 1. **Stateful validation**: aspirate, dispense and drop require mounted tips,
//!    pick-up requires empty channels unless the replace policy allows it.
//!
//! 2. **All-or-nothing calls**: a rejected call leaves the command log, the tip
//!    state and the active batch untouched.
//!
//! 3. **Append-only log**: commands are never edited or reordered; the log order is
//!    the execution order.
//!
//! 4. **Explicit defaults**: liquid class, tip type, head size and plate layout come
//!    from [`WorklistConfig`], with per-call overrides.
//!
//! ## Example
//!
//! ```rust
//! use fluent_worklist::worklist::{Worklist, WorklistConfig};
//!
//! let mut wl = Worklist::new(WorklistConfig::fca("DilutionSeries"))?;
//! wl.pick_up(None, &[0])?;
//! wl.aspirate("Plate", &["A1"], &[100.0], None, &[0])?;
//! wl.dispense("Plate", &["A2"], &[100.0], None, &[0])?;
//! wl.drop_tips(&[0])?;
//!
//! assert_eq!(wl.len(), 2);
//! # Ok::<(), fluent_worklist::worklist::WorklistError>(())
//! ```

mod builder;
mod command;
mod compile;
mod config;
mod error;
mod output;
mod summary;
pub mod templates;


pub use builder::Worklist;
pub use command::{Opcode, TipMask, WorklistCommand};
pub use compile::compile;
pub use config::{TipMarkers, WorklistConfig};
pub use error::{CompileError, WorklistError};
pub use summary::WorklistSummary;
