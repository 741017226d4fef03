//! Error types for value generation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Which precondition of an integer range was violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Lower bound is greater than the upper bound.
    #[error("from ({from}) is greater than to ({to})")]
    Inverted { from: i64, to: i64 },
    /// Lower bound is below `MIN_SUPPORTED`.
    #[error("from ({from}) is below the minimum supported value")]
    BelowMinimum { from: i64 },
    /// Upper bound is above `MAX_SUPPORTED`.
    #[error("to ({to}) is above the maximum supported value")]
    AboveMaximum { to: i64 },
}

/// Error type for generator operations.
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Integer range failed validation
    #[error("Invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    /// Random source produced a value outside [0, 1)
    #[error("Invalid random value: {0} is outside [0, 1)")]
    InvalidRandomValue(f64),

    /// Date range is empty or inverted
    #[error("Invalid date range: end ({end}) must be after start ({start})")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Sampled code is not a Unicode scalar value
    #[error("Invalid character code: {0}")]
    InvalidCharCode(u32),

    /// strftime pattern contains an unknown specifier
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Configured timestamp could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeneratorError>;
