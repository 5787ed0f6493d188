//! Error types for market data operations

use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum DataError {
    /// API request failed
    #[error("API error {status}: {body}")]
    Api {
        status: u16,
        body: String,
    },

    /// Symbol is unknown to the data provider
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Provider has no candle data for the requested window
    #[error("No data for {symbol}: {reason}")]
    NoData {
        symbol: String,
        reason: String,
    },

    /// Rate limit exceeded for API
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded {
        provider: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Whether this failure should degrade to "indicators unavailable"
    /// rather than fail the whole request
    pub fn is_degradable(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(err.to_string(), "Symbol not found: INVALID");

        let err = DataError::NoData {
            symbol: "AAPL".to_string(),
            reason: "no_data status".to_string(),
        };
        assert_eq!(err.to_string(), "No data for AAPL: no_data status");
    }

    #[test]
    fn test_no_data_is_degradable() {
        let err = DataError::NoData {
            symbol: "AAPL".to_string(),
            reason: "empty window".to_string(),
        };
        assert!(err.is_degradable());
        assert!(!DataError::SymbolNotFound("X".to_string()).is_degradable());
    }
}
