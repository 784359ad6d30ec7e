/// Errors raised while addressing wells
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WellError {
    /// The well name is malformed or outside the plate
    #[error("Invalid well name '{name}': {reason}")]
    InvalidWellName {
        /// The name as supplied by the caller
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// The numeric well offset is negative or outside the plate
    #[error("Invalid well offset {offset}: {reason}")]
    InvalidWellOffset {
        /// The offending offset
        offset: i64,
        /// What was wrong with it
        reason: String,
    },

    /// The plate dimensions cannot be addressed with single-letter rows
    #[error("Invalid plate layout {rows}x{columns}")]
    InvalidLayout {
        /// Row count
        rows: u32,
        /// Column count
        columns: u32,
    },
}

impl WellError {
    pub(crate) fn name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidWellName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn offset(offset: i64, reason: impl Into<String>) -> Self {
        Self::InvalidWellOffset {
            offset,
            reason: reason.into(),
        }
    }
}
