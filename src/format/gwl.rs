use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::worklist::{Opcode, TipMask, WorklistCommand};

use super::error::FormatError;
use super::format_volume;

/// Fields on every `A`, `D` and `W` line, counting the empty one after the last `;`
pub const GWL_FIELDS: usize = 11;

/// Comment lines written before the first command
pub const HEADER_LINES: usize = 6;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAME_KEY: &str = "Worklist: ";
const CREATED_KEY: &str = "Created: ";
const LIQUID_CLASS_KEY: &str = "Liquid class: ";
const TIP_TYPE_KEY: &str = "Tip type: ";
const COMMANDS_KEY: &str = "Commands: ";

/// Contents of the header comment block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GwlHeader {
    /// Worklist name
    pub name: Option<String>,
    /// Creation time, second resolution
    pub created: Option<NaiveDateTime>,
    /// Default liquid class
    pub liquid_class: Option<String>,
    /// Default tip type
    pub tip_type: Option<String>,
    /// Command count announced by the header
    pub declared_commands: Option<usize>,
}

impl GwlHeader {
    /// Whether a header block was found
    pub fn is_present(&self) -> bool {
        self.name.is_some()
    }
}

/// Render one command as a GWL line, without the line terminator
pub fn gwl_line(command: &WorklistCommand) -> String {
    if command.opcode == Opcode::Comment {
        return format!("C;{}", command.comment.as_deref().unwrap_or_default());
    }

    let position = command.position.map(|p| p.to_string()).unwrap_or_default();
    let volume = command.volume.map(format_volume).unwrap_or_default();
    let tip_mask = if command.tip_mask.is_empty() {
        String::new()
    } else {
        command.tip_mask.to_string()
    };

    // opcode;rack;rack id;rack type;position;tube id;volume;liquid class;tip type;mask;
    format!(
        "{};{};;;{};;{};{};;{};",
        command.opcode.code(),
        command.rack_label,
        position,
        volume,
        command.liquid_class,
        tip_mask
    )
}

/// Render the header block followed by one line per command
pub fn write_gwl(header: &GwlHeader, commands: &[WorklistCommand]) -> String {
    let mut out = String::with_capacity((commands.len() + HEADER_LINES) * 48);

    let created = header
        .created
        .map(|c| c.format(CREATED_FORMAT).to_string())
        .unwrap_or_default();
    let _ = writeln!(out, "C;{NAME_KEY}{}", header.name.as_deref().unwrap_or_default());
    let _ = writeln!(out, "C;{CREATED_KEY}{created}");
    let _ = writeln!(
        out,
        "C;{LIQUID_CLASS_KEY}{}",
        header.liquid_class.as_deref().unwrap_or_default()
    );
    let _ = writeln!(out, "C;{TIP_TYPE_KEY}{}", header.tip_type.as_deref().unwrap_or_default());
    let _ = writeln!(out, "C;{COMMANDS_KEY}{}", commands.len());
    out.push_str("C;\n");

    for command in commands {
        out.push_str(&gwl_line(command));
        out.push('\n');
    }
    out
}

/// Parse the command lines of a GWL file.
///
/// Comment and blank lines are skipped, `\r\n` endings are accepted, and a bare `W;`
/// is read as a wash with an empty mask.
pub fn parse_gwl(text: &str) -> Result<Vec<WorklistCommand>, FormatError> {
    let mut commands = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || is_comment(line) {
            continue;
        }
        commands.push(parse_line(line, line_no)?);
    }

    Ok(commands)
}

fn is_comment(line: &str) -> bool {
    line == "C" || line.starts_with("C;")
}

fn parse_line(line: &str, line_no: usize) -> Result<WorklistCommand, FormatError> {
    let fields: Vec<&str> = line.split(';').collect();

    let opcode = Opcode::from_code(fields[0].trim()).ok_or_else(|| FormatError::UnknownOpcode {
        line: line_no,
        opcode: fields[0].to_string(),
    })?;

    if opcode == Opcode::Wash && fields.len() == 2 && fields[1].trim().is_empty() {
        return Ok(WorklistCommand::wash(TipMask::EMPTY));
    }

    if fields.len() != GWL_FIELDS {
        return Err(FormatError::FieldCount {
            line: line_no,
            expected: GWL_FIELDS,
            found: fields.len(),
        });
    }

    let position = match fields[4] {
        "" => None,
        value => match value.parse::<u32>() {
            Ok(p) if p > 0 => Some(p),
            _ => {
                return Err(FormatError::InvalidPosition {
                    line: line_no,
                    value: value.to_string(),
                })
            }
        },
    };

    let volume = match fields[6] {
        "" => None,
        value => match value.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                return Err(FormatError::InvalidVolume {
                    line: line_no,
                    value: value.to_string(),
                })
            }
        },
    };

    let tip_mask = match fields[9] {
        "" => TipMask::EMPTY,
        value => value
            .parse::<u128>()
            .map(TipMask::from_bits)
            .map_err(|_| FormatError::InvalidTipMask {
                line: line_no,
                value: value.to_string(),
            })?,
    };

    Ok(WorklistCommand {
        opcode,
        rack_label: fields[1].to_string(),
        position,
        volume,
        liquid_class: fields[7].to_string(),
        tip_mask,
        comment: None,
    })
}

/// Read the leading header block; fields that are missing stay `None`
pub fn parse_header(text: &str) -> GwlHeader {
    let mut header = GwlHeader::default();

    for line in text.lines().map(|l| l.trim_end_matches('\r')) {
        let Some(body) = line.strip_prefix("C;") else {
            break;
        };

        if let Some(name) = body.strip_prefix(NAME_KEY) {
            header.name = Some(name.to_string());
        } else if let Some(created) = body.strip_prefix(CREATED_KEY) {
            header.created = NaiveDateTime::parse_from_str(created.trim(), CREATED_FORMAT).ok();
        } else if let Some(lc) = body.strip_prefix(LIQUID_CLASS_KEY) {
            header.liquid_class = Some(lc.to_string());
        } else if let Some(tip_type) = body.strip_prefix(TIP_TYPE_KEY) {
            header.tip_type = Some(tip_type.to_string());
        } else if let Some(count) = body.strip_prefix(COMMANDS_KEY) {
            header.declared_commands = count.trim().parse().ok();
        } else if body.is_empty() {
            break;
        }
    }

    header
}
