//! Error types for payout evaluation.

use polars::prelude::PolarsError;

/// Result type for payout operations
pub type PayoutResult<T> = Result<T, PayoutError>;

/// Error type for payout operations.
///
/// Only contract violations by the data-acquisition side end up here (missing
/// columns, wrong dtypes, unparseable timestamps) along with configuration
/// problems. Degenerate inputs such as an empty schedule or an inverted year
/// window are not errors; they evaluate to zero.
#[derive(Debug, thiserror::Error)]
pub enum PayoutError {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has unsupported type {dtype}")]
    ColumnType { column: String, dtype: String },

    #[error("Column '{column}' contains {count} null value(s)")]
    NullValues { column: String, count: usize },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Data frame error: {0}")]
    Frame(#[from] PolarsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for PayoutError {
    fn from(e: toml::de::Error) -> Self {
        PayoutError::ConfigurationError(format!("Failed to parse config: {}", e))
    }
}
