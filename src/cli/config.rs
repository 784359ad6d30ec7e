//! TOML configuration file support.
//!
//! Instead of passing many CLI flags, settings can live in a config file:
//!
//! ```toml
//! # fluent-worklist.toml
//! [worklist]
//! name = "DilutionSeries"
//! liquid_class = "Water Free Single"
//! tip_type = "fca 200 filtered"
//! channels = 8
//! plate_rows = 8
//! plate_columns = 12
//! allow_tip_replace = false
//! tip_markers = "emit"
//!
//! [output]
//! format = "gwl"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use fluent_worklist::format::WorklistFormat;
use fluent_worklist::tip_types::tip_type_from_name;
use fluent_worklist::tips::TipReplacePolicy;
use fluent_worklist::wells::PlateLayout;
use fluent_worklist::worklist::{TipMarkers, WorklistConfig};

use super::WorklistArgs;

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Worklist construction settings.
    #[serde(default)]
    pub worklist: WorklistSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Settings for the worklist being built.
#[derive(Debug, Default, Deserialize)]
pub struct WorklistSection {
    /// Worklist name.
    pub name: Option<String>,

    /// Default liquid class.
    pub liquid_class: Option<String>,

    /// Default tip type, full string or short name.
    pub tip_type: Option<String>,

    /// Channels on the pipetting head.
    pub channels: Option<usize>,

    /// Plate rows.
    pub plate_rows: Option<u32>,

    /// Plate columns.
    pub plate_columns: Option<u32>,

    /// Allow picking up tips on loaded channels.
    pub allow_tip_replace: Option<bool>,

    /// Whether pick-up and drop leave `W` lines.
    pub tip_markers: Option<TipMarkers>,
}

/// Settings for the written file.
#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Output format.
    pub format: Option<WorklistFormat>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file named by `args.config`, or the empty configuration.
    pub fn load(args: &WorklistArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge defaults, this file and command-line flags, in rising precedence.
    pub fn worklist_config(&self, args: &WorklistArgs, default_name: &str) -> WorklistConfig {
        let file = &self.worklist;
        let mut config = WorklistConfig::fca(default_name);

        if let Some(name) = args.name.as_ref().or(file.name.as_ref()) {
            config.name = name.clone();
        }
        if let Some(liquid_class) = args.liquid_class.as_ref().or(file.liquid_class.as_ref()) {
            config.liquid_class = liquid_class.clone();
        }
        if let Some(tip_type) = args.tip_type.as_ref().or(file.tip_type.as_ref()) {
            config.tip_type = tip_type_from_name(tip_type);
        }
        if let Some(channels) = args.channels.or(file.channels) {
            config.channel_count = channels;
        }

        let default_plate = PlateLayout::default();
        config.plate = PlateLayout {
            rows: file.plate_rows.unwrap_or(default_plate.rows),
            columns: file.plate_columns.unwrap_or(default_plate.columns),
        };

        if args.allow_tip_replace || file.allow_tip_replace == Some(true) {
            config.tip_replace = TipReplacePolicy::Replace;
        }
        if let Some(markers) = args.tip_markers.map(TipMarkers::from).or(file.tip_markers) {
            config.tip_markers = markers;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_worklist::tip_types::fca;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [worklist]
            name = "DilutionSeries"
            liquid_class = "DMSO Free Single"
            tip_type = "fca 200 filtered"
            channels = 4
            plate_rows = 16
            plate_columns = 24
            allow_tip_replace = true
            tip_markers = "emit"

            [output]
            format = "csv"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.worklist.channels, Some(4));
        assert_eq!(config.worklist.tip_markers, Some(TipMarkers::Emit));
        assert_eq!(config.output.format, Some(WorklistFormat::Csv));

        let resolved = config.worklist_config(&WorklistArgs::default(), "Default");
        assert_eq!(resolved.name, "DilutionSeries");
        assert_eq!(resolved.tip_type, fca::TIPS_200UL_FILTERED);
        assert_eq!(resolved.plate, PlateLayout::plate_384());
        assert_eq!(resolved.tip_replace, TipReplacePolicy::Replace);
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::from_str("[worklist]\nname = \"FromFile\"\nchannels = 4\n").unwrap();
        let args = WorklistArgs {
            name: Some("FromFlag".to_string()),
            ..Default::default()
        };

        let resolved = config.worklist_config(&args, "Default");
        assert_eq!(resolved.name, "FromFlag");
        assert_eq!(resolved.channel_count, 4);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        let resolved = config.worklist_config(&WorklistArgs::default(), "Protocol");
        assert_eq!(resolved, WorklistConfig::fca("Protocol"));
    }
}
