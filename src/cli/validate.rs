use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Validate worklist file integrity
pub fn run(file: PathBuf) -> Result<()> {
    use fluent_worklist::validator::validate_worklist_file;

    info!("Validating {}", file.display());

    match validate_worklist_file(&file) {
        Ok(report) => {
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
