use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed, but the file looks suspicious
    Warning(String),
    /// The file is unusable
    Failed(String),
}

impl CheckStatus {
    /// Whether the check passed cleanly
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Whether the check produced a warning
    pub fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    /// Whether the check failed
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// Short description of what was checked
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Every check run against one worklist file
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// File (or label) that was validated
    pub file_path: String,
}

impl ValidationReport {
    /// Empty report for `file_path`
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Record a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// True if any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// True if any check warned
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Checks that passed
    pub fn success_count(&self) -> usize {
        self.count(CheckStatus::is_ok)
    }

    /// Checks that warned
    pub fn warning_count(&self) -> usize {
        self.count(CheckStatus::is_warning)
    }

    /// Checks that failed
    pub fn failure_count(&self) -> usize {
        self.count(CheckStatus::is_failed)
    }

    fn count(&self, pred: fn(&CheckStatus) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Render with terminal colours when the `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut out = String::new();
            out.push_str(&format!("{}\n", style("Worklist Validation Report").bold().cyan()));
            out.push_str(&format!("{}: {}\n\n", style("File").bold(), self.file_path));

            for check in &self.checks {
                let symbol = check.status.symbol();
                match &check.status {
                    CheckStatus::Ok => {
                        out.push_str(&format!("[{}] {}\n", style(symbol).green(), check.name));
                    }
                    CheckStatus::Warning(msg) => out.push_str(&format!(
                        "[{}] {} - {}: {}\n",
                        style(symbol).yellow(),
                        check.name,
                        style("WARNING").yellow().bold(),
                        msg
                    )),
                    CheckStatus::Failed(msg) => out.push_str(&format!(
                        "[{}] {} - {}: {}\n",
                        style(symbol).red(),
                        check.name,
                        style("FAILED").red().bold(),
                        msg
                    )),
                }
            }

            out.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));

            let verdict = style(self.verdict()).bold();
            let verdict = if self.has_failures() {
                verdict.red()
            } else if self.has_warnings() {
                verdict.yellow()
            } else {
                verdict.green()
            };
            out.push_str(&format!("{verdict}\n"));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worklist Validation Report")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f)?;

        for check in &self.checks {
            write!(f, "[{}] {}", check.status.symbol(), check.name)?;
            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {msg}")?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {msg}")?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}
