//! Error types for tractview-core
//!
//! Every engine error is local and recoverable. The caller decides whether
//! to show a placeholder or skip rendering; nothing here is fatal.

use thiserror::Error;
use tractview_stats::StatsError;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Referenced column is absent from the dataset
    #[error("Field '{field}' not found in dataset")]
    MissingField { field: String },

    /// Row index outside the dataset
    #[error("Row index {index} out of range for dataset with {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// Weights summed to zero, so shares are undefined
    #[error("Total weight of '{weight_field}' is zero; shares are undefined")]
    DivisionByZero { weight_field: String },

    /// No non-null values for the attribute
    #[error("Attribute '{attribute}' has no non-null values")]
    EmptySummary { attribute: String },

    /// Dataset construction violated a structural invariant
    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    /// Error from the statistics primitives
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of its valid range or otherwise unusable
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A key appears more than once where keys must be unique
    #[error("Duplicate key '{key}' in {context}")]
    DuplicateKey { key: String, context: String },

    /// The configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl EngineError {
    pub(crate) fn missing(field: &str) -> Self {
        EngineError::MissingField {
            field: field.to_string(),
        }
    }
}
