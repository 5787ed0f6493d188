//! Error types for indicator computation

use thiserror::Error;

/// Indicator engine errors
///
/// A series that is merely too short for an indicator's warm-up window is
/// not an error; those computations return `Ok(None)`. The variants here
/// are caller mistakes and fail loudly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    /// Misconfigured period parameter (zero period, or MACD fast >= slow)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Price series contains a value that is negative, NaN, or infinite
    #[error("invalid price at index {index}: {value}")]
    InvalidPrice {
        index: usize,
        value: String,
    },
}

/// Result type alias for indicator operations
pub type Result<T> = std::result::Result<T, IndicatorError>;
