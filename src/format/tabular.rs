use csv::{Terminator, WriterBuilder};

use crate::worklist::WorklistCommand;

use super::error::FormatError;
use super::format_volume;

/// Column names of the tabular format
pub const CSV_HEADER: [&str; 6] = [
    "Command",
    "RackLabel",
    "Position",
    "Volume",
    "LiquidClass",
    "Comment",
];

/// Render a header row and one row per command
pub fn write_csv(commands: &[WorklistCommand]) -> Result<String, FormatError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(commands.len() * 48));

    writer.write_record(CSV_HEADER)?;
    for command in commands {
        let position = command.position.map(|p| p.to_string()).unwrap_or_default();
        let volume = command.volume.map(format_volume).unwrap_or_default();
        writer.write_record([
            command.opcode.code(),
            command.rack_label.as_str(),
            position.as_str(),
            volume.as_str(),
            command.liquid_class.as_str(),
            command.comment.as_deref().unwrap_or_default(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| FormatError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| FormatError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
