//! # fluent-worklist
//!
//! Command-line front end for compiling pipetting protocols into Tecan worklists.
//!
//! ## Usage
//!
//! ```bash
//! # Compile a JSON protocol into a GWL worklist
//! fluent-worklist compile protocol.json dilution.gwl
//!
//! # Inspect or validate a worklist
//! fluent-worklist inspect dilution.gwl
//! fluent-worklist validate dilution.gwl
//!
//! # Convert between well names and offsets
//! fluent-worklist well H12
//!
//! # Write a demo dilution series
//! fluent-worklist demo
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
