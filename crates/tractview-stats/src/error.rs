//! Error types for tractview-stats

use thiserror::Error;

/// Errors raised by the slice-level statistics primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The accumulated weight was zero, so a weighted ratio is undefined
    #[error("Total weight is zero; weighted value is undefined")]
    DivisionByZero,

    /// A weighted ratio left the range of finite numbers
    #[error("Weighted value overflowed; result is undefined")]
    Overflow,

    /// No non-null values were available to summarize
    #[error("No non-null values to summarize")]
    EmptySummary,

    /// A histogram was requested with no bins
    #[error("Invalid bin count: {bin_count} (must be at least 1)")]
    InvalidBinCount { bin_count: usize },

    /// Paired slices (values and weights) have different lengths
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bin_count_display() {
        let err = StatsError::InvalidBinCount { bin_count: 0 };
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = StatsError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }
}
