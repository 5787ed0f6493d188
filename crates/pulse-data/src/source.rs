//! Dependency-injection seam for the quote/candle source

use crate::error::Result;
use crate::types::{CandleSet, NewsArticle, Quote, Resolution};
use async_trait::async_trait;

/// The narrow interface the enrichment pipeline consumes.
///
/// Implemented by [`crate::FinnhubClient`]; mocked in service tests. Keeping
/// the seam here means the orchestration layer never touches provider
/// specifics and the engine never touches I/O at all.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Latest point-in-time quote for a symbol
    async fn quote(&self, symbol: &str) -> Result<Quote>;

    /// Candle history, oldest first
    async fn candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        lookback_count: usize,
    ) -> Result<CandleSet>;

    /// Recent company news
    async fn company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>>;
}
