use crate::tips::TipError;
use crate::wells::WellError;

/// Errors raised by worklist builder operations.
///
/// A call that returns any of these has left the worklist exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorklistError {
    /// Bad well addressing
    #[error("Well error: {0}")]
    Well(#[from] WellError),

    /// Tip-state precondition violated
    #[error("Tip error: {0}")]
    Tip(#[from] TipError),

    /// Per-channel argument lists of unequal length
    #[error("Arity mismatch: {wells} wells, {volumes} volumes, {channels} channels")]
    ArityMismatch {
        /// Number of wells supplied
        wells: usize,
        /// Number of volumes supplied
        volumes: usize,
        /// Number of channels supplied
        channels: usize,
    },

    /// A batch operation was given no channels or wells
    #[error("Empty batch: {0} was given no channels or wells")]
    EmptyBatch(&'static str),

    /// Negative, NaN or infinite volume
    #[error("Invalid volume {0}: volumes must be finite and non-negative")]
    InvalidVolume(f64),

    /// Explicit aspirate total smaller than what the dispenses need
    #[error("Insufficient volume: {total} µL aspirated but {required} µL dispensed")]
    InsufficientVolume {
        /// Volume aspirated
        total: f64,
        /// Sum of the dispense volumes
        required: f64,
    },

    /// A text field would break the line format
    #[error("Invalid {field} '{value}': must not contain ';' or line breaks")]
    InvalidField {
        /// Which field
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while compiling a stream of operation records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// The worklist configuration was rejected before any record was applied
    #[error("Invalid worklist configuration: {0}")]
    Config(#[source] WorklistError),

    /// A record was rejected; records before it have been applied
    #[error("Operation {index} ({kind}) rejected: {source}")]
    Operation {
        /// Zero-based index of the rejected record
        index: usize,
        /// Record kind
        kind: &'static str,
        /// Why it was rejected
        #[source]
        source: WorklistError,
    },
}

impl CompileError {
    /// Index of the rejected record, if a record was rejected
    pub fn index(&self) -> Option<usize> {
        match self {
            CompileError::Config(_) => None,
            CompileError::Operation { index, .. } => Some(*index),
        }
    }
}
