use std::thread;
use std::time::Duration;

use log::info;

use crate::worklist::WorklistCommand;

use super::{Ack, ExecutionFailure, Executor};

/// Executor that logs each command instead of driving hardware
#[derive(Debug, Clone, Default)]
pub struct SimulatedExecutor {
    delay: Option<Duration>,
    executed: Vec<WorklistCommand>,
}

impl SimulatedExecutor {
    /// Executor with no delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` on every command
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay).filter(|d| !d.is_zero());
        self
    }

    /// Commands executed so far, in order
    pub fn executed(&self) -> &[WorklistCommand] {
        &self.executed
    }
}

impl Executor for SimulatedExecutor {
    fn execute(&mut self, command: &WorklistCommand) -> Result<Ack, ExecutionFailure> {
        info!("[SIM {:>4}] {}", self.executed.len(), command);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        self.executed.push(command.clone());
        Ok(Ack::default())
    }
}
