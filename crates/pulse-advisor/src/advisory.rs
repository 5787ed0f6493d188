//! Advisory result types and reply parsing

use crate::error::{AdvisorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Trading signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// Risk assessment attached to a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Parsed model verdict; camelCase on the wire per the prompt contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub signal: Signal,
    /// Model-reported confidence, 0-100
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub short_term_outlook: String,
    pub risk_level: RiskLevel,
}

fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static pattern compiles"))
}

/// Parse an [`Advisory`] out of a raw model reply.
///
/// Models routinely wrap the JSON in markdown fences or prose despite the
/// prompt's instructions, so the first `{...}` block is extracted before
/// deserializing.
pub fn parse_advisory(reply: &str) -> Result<Advisory> {
    let json = json_object_pattern()
        .find(reply)
        .map_or(reply, |m| m.as_str());

    let advisory: Advisory = serde_json::from_str(json)
        .map_err(|e| AdvisorError::MalformedReply(format!("{e}; reply: {json}")))?;

    if !(0.0..=100.0).contains(&advisory.confidence) {
        return Err(AdvisorError::MalformedReply(format!(
            "confidence {} outside 0-100",
            advisory.confidence
        )));
    }

    Ok(advisory)
}
