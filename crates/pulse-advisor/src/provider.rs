//! Advisory provider trait and request types

use crate::advisory::Advisory;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One news headline shown to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub headline: String,
    pub source: String,
}

/// Everything the advisory formatter consumes for one verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    /// Normalized ticker symbol
    pub symbol: String,
    /// Enriched stock record as hand-off JSON (quote fields plus any
    /// defined indicators; absent indicators are absent fields)
    pub stock: serde_json::Value,
    /// Recent headlines, newest first
    pub headlines: Vec<Headline>,
}

/// An LLM-backed formatter turning an enriched stock record into a
/// buy/sell/hold verdict
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// Produce a verdict for the request
    async fn advise(&self, request: &AdvisoryRequest) -> Result<Advisory>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
