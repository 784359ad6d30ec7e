use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::executor::{self, Cancellation, ExecutionError, ExecutionReport, Executor};
use crate::format::{self, FormatError, GwlHeader, WorklistFormat};

use super::builder::Worklist;

impl Worklist {
    /// Header block describing this worklist.
    ///
    /// The `Tip type` line is the configured default. Tip types chosen at a later
    /// pick-up are tracked by [`Worklist::tip_type`] but do not change the header.
    pub fn header(&self) -> GwlHeader {
        GwlHeader {
            name: Some(self.config.name.clone()),
            created: Some(self.created.naive_local()),
            liquid_class: Some(self.config.liquid_class.clone()),
            tip_type: Some(self.config.tip_type.clone()),
            declared_commands: Some(self.commands.len()),
        }
    }

    /// Render the command log; repeated calls give identical output
    pub fn serialize(&self, format: WorklistFormat) -> Result<String, FormatError> {
        format::serialize(&self.header(), &self.commands, format)
    }

    /// Write the rendered command log to `path`, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>, format: WorklistFormat) -> Result<PathBuf, FormatError> {
        let path = path.as_ref();
        let content = self.serialize(format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;

        info!(
            "Saved worklist '{}' ({} commands) to {}",
            self.name(),
            self.commands.len(),
            path.display()
        );
        Ok(path.to_path_buf())
    }

    /// Submit every command to `executor`, one at a time and in order
    pub fn execute<E: Executor + ?Sized>(
        &self,
        executor: &mut E,
        cancellation: &Cancellation,
    ) -> Result<ExecutionReport, ExecutionError> {
        executor::run(executor, &self.commands, cancellation)
    }
}
