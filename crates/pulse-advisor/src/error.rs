//! Error types for the advisory formatter

use thiserror::Error;

/// Advisory provider errors
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Provider configuration error (missing key, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// API key rejected
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Provider rate limit hit
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Provider rejected the request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request failed with an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Model reply did not contain the expected JSON contract
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    /// Prompt template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for advisory operations
pub type Result<T> = std::result::Result<T, AdvisorError>;
