//! Advisory formatter
//!
//! Turns an enriched stock record plus recent headlines into a typed
//! buy/sell/hold verdict by prompting a hosted LLM. The prompt demands
//! strict JSON; parsing tolerates markdown-fenced replies but rejects
//! anything that does not satisfy the contract.
//!
//! [`AdvisoryProvider`] is the seam; [`GeminiProvider`] is the default
//! implementation.

pub mod advisory;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;

pub use advisory::{Advisory, RiskLevel, Signal, parse_advisory};
pub use error::{AdvisorError, Result};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use provider::{AdvisoryProvider, AdvisoryRequest, Headline};
