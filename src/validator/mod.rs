//! # Worklist validation
//!
//! Integrity checks for a saved GWL worklist, for files written by this crate or by
//! hand.
//!
//! ## Checks
//!
//! 1. **Header**: the comment header block is present
//! 2. **Syntax**: every command line parses
//! 3. **Command count**: the header's declared count matches the body
//! 4. **Liquid flow**: no dispense on a channel that has not aspirated since its
//!    last `W` line
//! 5. **Volumes**: no zero-volume aspirate or dispense
//!
//! Content problems become report entries; only I/O errors are returned as `Err`.
//!
//! ```rust,no_run
//! use fluent_worklist::validator::validate_worklist_file;
//! use std::path::Path;
//!
//! let report = validate_worklist_file(Path::new("dilution.gwl"))?;
//! println!("{}", report);
//! # Ok::<(), fluent_worklist::validator::ValidationError>(())
//! ```

mod commands;
mod header;
mod report;

use std::path::Path;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

/// Errors that prevent validation from running
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validate the worklist file at `path`
pub fn validate_worklist_file(path: &Path) -> Result<ValidationReport, ValidationError> {
    let text = std::fs::read_to_string(path)?;
    Ok(validate_worklist_text(path.display().to_string(), &text))
}

/// Validate worklist text; `label` names it in the report
pub fn validate_worklist_text(label: impl Into<String>, text: &str) -> ValidationReport {
    let mut report = ValidationReport::new(label);

    let header = header::check_header(text, &mut report);
    if let Some(commands) = commands::check_syntax(text, &mut report) {
        header::check_declared_count(text, &header, &mut report);
        commands::check_liquid_flow(&commands, &mut report);
        commands::check_volumes(&commands, &mut report);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worklist::{Worklist, WorklistConfig};
    use crate::format::WorklistFormat;

    fn saved_worklist() -> String {
        let mut wl = Worklist::new(WorklistConfig::fca("Valid")).unwrap();
        wl.pick_up(None, &[0]).unwrap();
        wl.aspirate("Plate", &["A1"], &[100.0], None, &[0]).unwrap();
        wl.dispense("Plate", &["A2"], &[100.0], None, &[0]).unwrap();
        wl.serialize(WorklistFormat::Gwl).unwrap()
    }

    fn check<'a>(report: &'a ValidationReport, name: &str) -> &'a ValidationCheck {
        report
            .checks
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no check named {name}"))
    }

    #[test]
    fn test_validation_report_display() {
        let mut report = ValidationReport::new("test.gwl");
        report.add_check(ValidationCheck::ok("Check 1"));
        report.add_check(ValidationCheck::warning("Check 2", "This is a warning"));
        report.add_check(ValidationCheck::failed("Check 3", "This failed"));

        let output = format!("{}", report);
        assert!(output.contains("✓"));
        assert!(output.contains("⚠"));
        assert!(output.contains("✗"));
        assert!(output.contains("1 passed, 1 warnings, 1 failed"));
        assert!(output.contains("Validation FAILED"));
    }

    #[test]
    fn test_builder_output_passes() {
        let report = validate_worklist_text("valid.gwl", &saved_worklist());
        assert!(!report.has_failures(), "{report}");
        assert!(!report.has_warnings(), "{report}");
        assert_eq!(report.success_count(), 5);
    }

    #[test]
    fn test_missing_header_warns() {
        let report = validate_worklist_text("bare.gwl", "A;Plate;;;1;;10.0;Water;;1;\nD;Plate;;;2;;10.0;Water;;1;\n");
        assert!(!report.has_failures());
        assert!(check(&report, "Header block").status.is_warning());
    }

    #[test]
    fn test_bad_line_fails() {
        let text = saved_worklist().replace(";;100.0;", ";;lots;");
        let report = validate_worklist_text("broken.gwl", &text);
        assert!(report.has_failures());
        match &check(&report, "Command syntax").status {
            CheckStatus::Failed(msg) => assert!(msg.contains("Line 7"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_declared_count_mismatch_warns() {
        let text = saved_worklist().replace("C;Commands: 2", "C;Commands: 5");
        let report = validate_worklist_text("count.gwl", &text);
        assert_eq!(report.warning_count(), 1);
        assert!(check(&report, "Declared command count").status.is_warning());
    }

    #[test]
    fn test_dispense_without_aspirate_warns() {
        let text = "W;;;;;;;;;1;\nD;Plate;;;2;;10.0;Water;;1;\nA;Plate;;;1;;10.0;Water;;2;\nD;Plate;;;2;;10.0;Water;;2;\n";
        let report = validate_worklist_text("flow.gwl", text);
        let flow = check(&report, "Liquid flow");
        assert!(flow.status.is_warning(), "{report}");
        match &flow.status {
            CheckStatus::Warning(msg) => assert!(msg.contains("command 1"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_zero_volume_warns() {
        let text = "A;Plate;;;1;;0.0;Water;;1;\nD;Plate;;;2;;0.0;Water;;1;\n";
        let report = validate_worklist_text("zero.gwl", text);
        assert!(check(&report, "Volumes").status.is_warning());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = validate_worklist_file(Path::new("/nonexistent/worklist.gwl"));
        assert!(matches!(result, Err(ValidationError::IoError(_))));
    }
}
