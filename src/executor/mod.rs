//! # Live execution
//!
//! Hands worklist commands to a hardware-facing [`Executor`] one at a time.
//!
//! [`run`] submits commands strictly in log order and blocks on each `execute` call
//! before the next submission. Comment commands have no physical effect and are
//! skipped. The loop stops at the first failure or when the [`Cancellation`] token
//! fires, and reports the index of the first command that did not complete.
//! Failed commands are never retried.
//!
//! ```rust
//! use fluent_worklist::executor::{Cancellation, SimulatedExecutor};
//! use fluent_worklist::worklist::{Worklist, WorklistConfig};
//!
//! let mut wl = Worklist::new(WorklistConfig::fca("Demo"))?;
//! wl.pick_up(None, &[0])?;
//! wl.aspirate("Plate", &["A1"], &[50.0], None, &[0])?;
//!
//! let mut executor = SimulatedExecutor::new();
//! let report = wl.execute(&mut executor, &Cancellation::never()).unwrap();
//! assert_eq!(report.executed, 1);
//! # Ok::<(), fluent_worklist::worklist::WorklistError>(())
//! ```

mod simulated;

#[cfg(test)]
mod tests;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info, warn};

use crate::worklist::WorklistCommand;

pub use simulated::SimulatedExecutor;

/// Acknowledgement of a completed command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Optional detail reported by the executor
    pub detail: Option<String>,
}

/// A command the executor could not complete
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExecutionFailure {
    /// What went wrong, as reported by the hardware binding
    pub message: String,
}

impl ExecutionFailure {
    /// Failure with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Something that carries out one worklist command at a time
pub trait Executor {
    /// Carry out `command`, blocking until it has completed or failed
    fn execute(&mut self, command: &WorklistCommand) -> Result<Ack, ExecutionFailure>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn execute(&mut self, command: &WorklistCommand) -> Result<Ack, ExecutionFailure> {
        (**self).execute(command)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute(&mut self, command: &WorklistCommand) -> Result<Ack, ExecutionFailure> {
        (**self).execute(command)
    }
}

/// Why an execution run stopped early
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    /// The executor rejected a command
    #[error("Command {index} ({command}) failed: {source}")]
    Failed {
        /// Index of the failed command in the log
        index: usize,
        /// The failed command
        command: Box<WorklistCommand>,
        /// Failure reported by the executor
        #[source]
        source: ExecutionFailure,
    },

    /// The cancellation token fired before the command was submitted
    #[error("Execution cancelled before command {index}")]
    Cancelled {
        /// Index of the first command not submitted
        index: usize,
    },
}

impl ExecutionError {
    /// Index of the first command that did not complete
    pub fn index(&self) -> usize {
        match self {
            ExecutionError::Failed { index, .. } | ExecutionError::Cancelled { index } => *index,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Commands acknowledged by the executor
    pub executed: usize,
    /// Comment commands skipped
    pub skipped: usize,
}

/// Cancellation token checked before every submission.
///
/// Obtained together with its [`CancelHandle`] from [`Cancellation::new`]. Once
/// cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct Cancellation {
    receiver: Option<Receiver<()>>,
}

/// Triggers a [`Cancellation`]; cloneable and usable from any thread
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: Sender<()>,
}

impl Cancellation {
    /// A linked handle and token
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (CancelHandle, Cancellation) {
        let (sender, receiver) = bounded(1);
        (
            CancelHandle { sender },
            Cancellation {
                receiver: Some(receiver),
            },
        )
    }

    /// A token that never fires
    pub fn never() -> Self {
        Self { receiver: None }
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.receiver.as_ref().is_some_and(|rx| !rx.is_empty())
    }
}

impl CancelHandle {
    /// Request cancellation; repeated calls are harmless
    pub fn cancel(&self) {
        // A full channel means cancellation is already pending.
        let _ = self.sender.try_send(());
    }
}

/// Submit `commands` to `executor` in order, one at a time
pub fn run<E: Executor + ?Sized>(
    executor: &mut E,
    commands: &[WorklistCommand],
    cancellation: &Cancellation,
) -> Result<ExecutionReport, ExecutionError> {
    info!("Executing {} commands", commands.len());
    let mut report = ExecutionReport::default();

    for (index, command) in commands.iter().enumerate() {
        if cancellation.is_cancelled() {
            warn!(
                "Execution cancelled before command {} ({} completed)",
                index, report.executed
            );
            return Err(ExecutionError::Cancelled { index });
        }

        if !command.is_physical() {
            debug!("Skipping comment at {}", index);
            report.skipped += 1;
            continue;
        }

        match executor.execute(command) {
            Ok(_) => report.executed += 1,
            Err(source) => {
                error!("Command {} ({}) failed: {}", index, command, source);
                return Err(ExecutionError::Failed {
                    index,
                    command: Box::new(command.clone()),
                    source,
                });
            }
        }
    }

    info!(
        "Execution complete: {} commands executed, {} comments skipped",
        report.executed, report.skipped
    );
    Ok(report)
}
