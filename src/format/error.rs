/// Errors raised while reading or writing worklist files.
///
/// Parse errors carry the 1-based line number of the offending line.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Wrong number of `;`-separated fields
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// Line number
        line: usize,
        /// Fields required
        expected: usize,
        /// Fields present
        found: usize,
    },

    /// Opcode other than A, D, W or C
    #[error("Line {line}: unknown opcode '{opcode}'")]
    UnknownOpcode {
        /// Line number
        line: usize,
        /// The opcode field
        opcode: String,
    },

    /// Position that is not a positive integer
    #[error("Line {line}: invalid position '{value}'")]
    InvalidPosition {
        /// Line number
        line: usize,
        /// The position field
        value: String,
    },

    /// Volume that is not a finite number
    #[error("Line {line}: invalid volume '{value}'")]
    InvalidVolume {
        /// Line number
        line: usize,
        /// The volume field
        value: String,
    },

    /// Tip mask that is not a 128-bit unsigned integer
    #[error("Line {line}: invalid tip mask '{value}'")]
    InvalidTipMask {
        /// Line number
        line: usize,
        /// The tip mask field
        value: String,
    },

    /// Error from the CSV writer
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while saving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Line number for parse errors
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::FieldCount { line, .. }
            | FormatError::UnknownOpcode { line, .. }
            | FormatError::InvalidPosition { line, .. }
            | FormatError::InvalidVolume { line, .. }
            | FormatError::InvalidTipMask { line, .. } => Some(*line),
            FormatError::Csv(_) | FormatError::Io(_) => None,
        }
    }
}
