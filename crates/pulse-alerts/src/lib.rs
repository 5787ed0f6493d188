//! Alert relay
//!
//! Relays analysis verdicts to WhatsApp through an external
//! browser-automation bridge daemon. This crate holds only the HTTP
//! client, recipient normalization, and message formatting; session
//! management and message-dispatch heuristics stay in the daemon.

pub mod bridge;
pub mod error;
pub mod format;

pub use bridge::{BridgeClient, BridgeStatus, normalize_recipient};
pub use error::{AlertError, Result};
pub use format::format_analysis_alert;
