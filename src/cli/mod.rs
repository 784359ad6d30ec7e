use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fluent_worklist::format::WorklistFormat;
use fluent_worklist::worklist::TipMarkers;

mod compile;
mod config;
mod demo;
mod inspect;
mod simulate;
mod validate;
mod well;

/// fluent-worklist - Compile pipetting protocols into Tecan worklists
#[derive(Parser)]
#[command(name = "fluent-worklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output file format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Tecan generic worklist
    Gwl,
    /// Comma-separated table
    Csv,
}

impl From<FormatArg> for WorklistFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Gwl => WorklistFormat::Gwl,
            FormatArg::Csv => WorklistFormat::Csv,
        }
    }
}

/// Tip-change marker lines.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MarkersArg {
    /// No line for pick-up or drop
    Omit,
    /// A `W` line for every pick-up and drop
    Emit,
}

impl From<MarkersArg> for TipMarkers {
    fn from(arg: MarkersArg) -> Self {
        match arg {
            MarkersArg::Omit => TipMarkers::Omit,
            MarkersArg::Emit => TipMarkers::Emit,
        }
    }
}

/// Worklist settings shared by the commands that build a worklist.
///
/// Flags override the config file, which overrides the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct WorklistArgs {
    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worklist name written to the header
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Channels on the pipetting head
    #[arg(long)]
    pub channels: Option<usize>,

    /// Default liquid class
    #[arg(long)]
    pub liquid_class: Option<String>,

    /// Default tip type (full DiTi string or a short name like "fca 200 filtered")
    #[arg(long)]
    pub tip_type: Option<String>,

    /// Allow picking up tips on channels that already hold one
    #[arg(long)]
    pub allow_tip_replace: bool,

    /// Tip-change marker lines
    #[arg(long, value_enum)]
    pub tip_markers: Option<MarkersArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a JSON protocol into a worklist file
    Compile {
        /// JSON file holding an array of operation records
        #[arg(value_name = "PROTOCOL")]
        protocol: PathBuf,

        /// Output worklist path (defaults to the protocol path with a .gwl/.csv extension)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        #[command(flatten)]
        worklist: WorklistArgs,
    },

    /// Display the header, commands and summary of a GWL worklist
    Inspect {
        /// Input GWL file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate GWL worklist integrity
    Validate {
        /// Input GWL file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Convert a well name to its offset and position, or an offset to its name
    Well {
        /// Well name (e.g. "H12") or zero-based offset (e.g. 95)
        #[arg(value_name = "WELL")]
        well: String,

        /// Rows on the plate
        #[arg(short = 'r', long, default_value = "8")]
        rows: u32,
    },

    /// Compile a JSON protocol and run it through the simulated executor
    Simulate {
        /// JSON file holding an array of operation records
        #[arg(value_name = "PROTOCOL")]
        protocol: PathBuf,

        /// Delay per command in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,

        #[command(flatten)]
        worklist: WorklistArgs,
    },

    /// Write a demo dilution-series worklist
    Demo {
        /// Output worklist path
        #[arg(value_name = "OUTPUT", default_value = "demo_dilution_series.gwl")]
        output: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "gwl")]
        format: FormatArg,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compile {
            protocol,
            output,
            format,
            worklist,
        } => compile::run(protocol, output, format.map(WorklistFormat::from), worklist),
        Commands::Inspect { file } => inspect::run(file),
        Commands::Validate { file } => validate::run(file),
        Commands::Well { well, rows } => well::run(&well, rows),
        Commands::Simulate {
            protocol,
            delay_ms,
            worklist,
        } => simulate::run(protocol, delay_ms, worklist),
        Commands::Demo { output, format } => demo::run(output, format.into()),
    }
}
