//! Application-level error type

use thiserror::Error;

/// Errors surfaced by the orchestration layer
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Market data failure that could not be degraded away
    #[error(transparent)]
    Data(#[from] pulse_data::DataError),

    /// Indicator engine rejected its inputs
    #[error(transparent)]
    Indicator(#[from] pulse_indicators::IndicatorError),

    /// Advisory provider failure
    #[error(transparent)]
    Advisor(#[from] pulse_advisor::AdvisorError),

    /// Alert relay failure
    #[error(transparent)]
    Alert(#[from] pulse_alerts::AlertError),

    /// JSON round-trip failure between layers
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
