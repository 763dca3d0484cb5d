//! Error types for verdant-engine

use thiserror::Error;

/// Engine error type
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog row failed validation
    #[error("invalid record '{model}': {reason}")]
    InvalidRecord {
        /// Model name of the offending row (may be empty)
        model: String,
        /// What failed validation
        reason: String,
    },

    /// Two catalog rows share the same model name
    #[error("duplicate model: {0}")]
    DuplicateModel(String),

    /// A dataset must contain at least one record
    #[error("empty dataset")]
    EmptyDataset,

    /// Lookup by name found no matching record
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// A priority weight was outside [0, 1]
    #[error("weight out of range: {name}={value}")]
    WeightOutOfRange {
        /// Which weight was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A workload share was outside [0, 1]
    #[error("share out of range: {0}")]
    ShareOutOfRange(f64),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
