//! Error types for alert relaying

use thiserror::Error;

/// Alert relay errors
#[derive(Debug, Error)]
pub enum AlertError {
    /// Bridge configuration error (missing or invalid base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Bridge is up but not authenticated/ready to send
    #[error("Bridge not ready: {0}")]
    BridgeNotReady(String),

    /// Bridge rejected the send
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// Recipient number could not be normalized
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for alert operations
pub type Result<T> = std::result::Result<T, AlertError>;
