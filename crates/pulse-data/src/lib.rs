//! Market data layer
//!
//! Typed access to the Finnhub REST API (quotes, candle history, company
//! and market news, symbol search) with per-minute rate limiting and TTL
//! caching. The [`MarketDataSource`] trait is the seam the enrichment
//! pipeline consumes; [`FinnhubClient`] is its production implementation.
//!
//! Client handles are constructed explicitly and passed down — no
//! module-level singletons.

pub mod cache;
pub mod error;
pub mod finnhub;
pub mod source;
pub mod types;

pub use cache::{CacheKey, CacheTiers, DataCache};
pub use error::{DataError, Result};
pub use finnhub::FinnhubClient;
pub use source::MarketDataSource;
pub use types::{CandleSet, NewsArticle, Quote, Resolution, SymbolMatch};
