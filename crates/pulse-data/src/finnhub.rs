//! Finnhub REST client

use crate::error::{DataError, Result};
use crate::source::MarketDataSource;
use crate::types::{CandleSet, NewsArticle, Quote, Resolution, SymbolMatch};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const DEFAULT_API_BASE: &str = "https://finnhub.io/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Days of company news to request, matching the dashboard's window
const COMPANY_NEWS_LOOKBACK_DAYS: i64 = 3;

/// Raw `/quote` payload. Unknown symbols come back as all-zero fields
/// with null deltas rather than an HTTP error.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    c: f64,
    #[serde(default)]
    d: Option<f64>,
    #[serde(default)]
    dp: Option<f64>,
    #[serde(default)]
    h: f64,
    #[serde(default)]
    l: f64,
    #[serde(default)]
    o: f64,
    #[serde(default)]
    pc: f64,
}

impl QuoteResponse {
    fn is_unknown_symbol(&self) -> bool {
        self.c == 0.0 && self.h == 0.0 && self.l == 0.0 && self.o == 0.0 && self.pc == 0.0
    }
}

/// Raw `/stock/candle` payload: parallel arrays plus a status flag
#[derive(Debug, Deserialize)]
struct CandleResponse {
    #[serde(default)]
    c: Vec<f64>,
    #[serde(default)]
    h: Vec<f64>,
    #[serde(default)]
    l: Vec<f64>,
    #[serde(default)]
    o: Vec<f64>,
    #[serde(default)]
    t: Vec<i64>,
    #[serde(default)]
    v: Vec<f64>,
    s: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolMatch>,
}

/// Finnhub client with per-minute rate limiting
///
/// The client handle is constructed explicitly and passed down; there is
/// no ambient singleton. Cloning shares the HTTP pool and the limiter.
#[derive(Clone)]
pub struct FinnhubClient {
    client: Client,
    api_base: String,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl FinnhubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_key` - Finnhub API key
    /// * `rate_limit` - Requests per minute (free tier: 60, premium: 300+)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(60).expect("nonzero")));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            rate_limiter,
        }
    }

    /// Override the API base URL (for test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(DataError::RateLimitExceeded {
                provider: "finnhub".to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Get the latest quote for a symbol
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = symbol.to_uppercase();
        let url = format!(
            "{}/quote?symbol={}&token={}",
            self.api_base, symbol, self.api_key
        );

        let raw: QuoteResponse = self.get_json(url).await?;
        if raw.is_unknown_symbol() {
            return Err(DataError::SymbolNotFound(symbol));
        }

        Ok(Quote {
            symbol,
            price: raw.c,
            change: raw.d.unwrap_or(0.0),
            change_percent: raw.dp.unwrap_or(0.0),
            high: raw.h,
            low: raw.l,
            open: raw.o,
            prev_close: raw.pc,
        })
    }

    /// Get candle history for a symbol
    ///
    /// `lookback_count` is the number of candles the caller wants; the
    /// wall-clock window requests twice that many days to ride over
    /// weekends and holidays.
    pub async fn get_candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        lookback_count: usize,
    ) -> Result<CandleSet> {
        let symbol = symbol.to_uppercase();
        let to = Utc::now().timestamp();
        let from = to - (lookback_count as i64) * 2 * 86_400;

        let url = format!(
            "{}/stock/candle?symbol={}&resolution={}&from={}&to={}&token={}",
            self.api_base,
            symbol,
            resolution.as_str(),
            from,
            to,
            self.api_key
        );

        let raw: CandleResponse = self.get_json(url).await?;
        match raw.s.as_str() {
            "ok" => Ok(CandleSet {
                symbol,
                close: raw.c,
                high: raw.h,
                low: raw.l,
                open: raw.o,
                timestamps: raw.t,
                volume: raw.v,
            }),
            "no_data" => Err(DataError::NoData {
                symbol,
                reason: "provider returned no_data".to_string(),
            }),
            other => Err(DataError::NoData {
                symbol,
                reason: format!("unexpected candle status: {other}"),
            }),
        }
    }

    /// Get company news for a symbol over the trailing window
    pub async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        let symbol = symbol.to_uppercase();
        let to = Utc::now().date_naive();
        let from = to - ChronoDuration::days(COMPANY_NEWS_LOOKBACK_DAYS);

        let url = format!(
            "{}/company-news?symbol={}&from={}&to={}&token={}",
            self.api_base,
            symbol,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d"),
            self.api_key
        );

        self.get_json(url).await
    }

    /// Get general market news
    ///
    /// # Arguments
    /// * `category` - News category (general, forex, crypto, merger)
    pub async fn get_market_news(&self, category: &str) -> Result<Vec<NewsArticle>> {
        let url = format!(
            "{}/news?category={}&token={}",
            self.api_base, category, self.api_key
        );

        self.get_json(url).await
    }

    /// Search for symbols matching a free-text query
    pub async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>> {
        let url = format!(
            "{}/search?q={}&token={}",
            self.api_base,
            urlencode(query),
            self.api_key
        );

        let raw: SearchResponse = self.get_json(url).await?;
        Ok(raw.result)
    }
}

/// Minimal percent-encoding for query text
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[async_trait]
impl MarketDataSource for FinnhubClient {
    async fn quote(&self, symbol: &str) -> Result<Quote> {
        self.get_quote(symbol).await
    }

    async fn candles(
        &self,
        symbol: &str,
        resolution: Resolution,
        lookback_count: usize,
    ) -> Result<CandleSet> {
        self.get_candles(symbol, resolution, lookback_count).await
    }

    async fn company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        self.get_company_news(symbol).await
    }
}
