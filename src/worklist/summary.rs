use std::collections::BTreeSet;
use std::fmt;

use super::builder::Worklist;
use super::command::{Opcode, WorklistCommand};

/// Counts and volume totals over a command log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorklistSummary {
    /// Worklist name
    pub name: String,
    /// Total number of commands, comments included
    pub commands: usize,
    /// Number of `A` lines
    pub aspirates: usize,
    /// Number of `D` lines
    pub dispenses: usize,
    /// Number of `W` lines
    pub washes: usize,
    /// Number of `C` lines
    pub comments: usize,
    /// Sum of aspirated volumes in µL
    pub aspirated_volume: f64,
    /// Sum of dispensed volumes in µL
    pub dispensed_volume: f64,
    /// Rack labels touched by liquid commands, sorted
    pub racks: BTreeSet<String>,
    /// Channels touched by any command, sorted
    pub channels: BTreeSet<usize>,
}

impl WorklistSummary {
    /// Summarize an arbitrary command log, e.g. one parsed back from disk
    pub fn from_commands(name: impl Into<String>, commands: &[WorklistCommand]) -> Self {
        let mut summary = Self {
            name: name.into(),
            commands: commands.len(),
            ..Default::default()
        };

        for command in commands {
            let volume = command.volume.unwrap_or(0.0);
            match command.opcode {
                Opcode::Aspirate => {
                    summary.aspirates += 1;
                    summary.aspirated_volume += volume;
                }
                Opcode::Dispense => {
                    summary.dispenses += 1;
                    summary.dispensed_volume += volume;
                }
                Opcode::Wash => summary.washes += 1,
                Opcode::Comment => summary.comments += 1,
            }
            if command.opcode.is_liquid() {
                summary.racks.insert(command.rack_label.clone());
            }
            summary.channels.extend(command.tip_mask.channels());
        }

        summary
    }
}

impl Worklist {
    /// Counts and totals for this worklist
    pub fn summary(&self) -> WorklistSummary {
        WorklistSummary::from_commands(self.name(), self.commands())
    }
}

impl fmt::Display for WorklistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Worklist: {}", self.name)?;
        writeln!(f, "------------------------")?;
        writeln!(f, "Commands: {}", self.commands)?;
        writeln!(
            f,
            "  Aspirates: {} ({:.1} µL total)",
            self.aspirates, self.aspirated_volume
        )?;
        writeln!(
            f,
            "  Dispenses: {} ({:.1} µL total)",
            self.dispenses, self.dispensed_volume
        )?;
        writeln!(f, "  Washes:    {}", self.washes)?;
        writeln!(f, "  Comments:  {}", self.comments)?;
        if !self.racks.is_empty() {
            let racks: Vec<&str> = self.racks.iter().map(String::as_str).collect();
            writeln!(f, "Racks: {}", racks.join(", "))?;
        }
        if !self.channels.is_empty() {
            writeln!(f, "Channels: {:?}", self.channels)?;
        }
        Ok(())
    }
}
