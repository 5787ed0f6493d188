//! Application configuration

use crate::error::{AppError, Result};
use pulse_data::Resolution;
use std::time::Duration;

/// Default candle lookback: comfortably past the MACD warm-up window so
/// the smoothed averages have settled before the value is trusted
pub const DEFAULT_CANDLE_LOOKBACK: usize = 50;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Finnhub API key
    pub finnhub_api_key: String,

    /// Finnhub requests per minute (free tier: 60)
    pub finnhub_rate_limit: u32,

    /// Gemini API key
    pub gemini_api_key: String,

    /// Gemini model identifier
    pub gemini_model: Option<String>,

    /// WhatsApp bridge base URL; alerts are disabled when unset
    pub bridge_url: Option<String>,

    /// Candle resolution for indicator history
    pub candle_resolution: Resolution,

    /// Number of candles requested for indicator history
    pub candle_lookback: usize,

    /// Cache TTL for quotes
    pub cache_ttl_realtime: Duration,

    /// Cache TTL for news
    pub cache_ttl_news: Duration,
}

impl AppConfig {
    /// Create a new configuration builder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the environment.
    ///
    /// Required: `FINNHUB_API_KEY`, `GEMINI_API_KEY`.
    /// Optional: `GEMINI_MODEL`, `WHATSAPP_BRIDGE_URL`.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder()
            .finnhub_api_key(require_env("FINNHUB_API_KEY")?)
            .gemini_api_key(require_env("GEMINI_API_KEY")?);

        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            builder = builder.gemini_model(model);
        }
        if let Ok(url) = std::env::var("WHATSAPP_BRIDGE_URL") {
            builder = builder.bridge_url(url);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.finnhub_api_key.is_empty() {
            return Err(AppError::Config("FINNHUB_API_KEY is missing".to_string()));
        }
        if self.gemini_api_key.is_empty() {
            return Err(AppError::Config("GEMINI_API_KEY is missing".to_string()));
        }
        if self.candle_lookback == 0 {
            return Err(AppError::Config(
                "candle_lookback must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| AppError::Config(format!("{name} is missing")))
}

/// Builder for [`AppConfig`]
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    finnhub_api_key: Option<String>,
    finnhub_rate_limit: Option<u32>,
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    bridge_url: Option<String>,
    candle_resolution: Option<Resolution>,
    candle_lookback: Option<usize>,
    cache_ttl_realtime: Option<Duration>,
    cache_ttl_news: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the Finnhub API key
    pub fn finnhub_api_key(mut self, key: impl Into<String>) -> Self {
        self.finnhub_api_key = Some(key.into());
        self
    }

    /// Set the Finnhub rate limit (requests per minute)
    pub fn finnhub_rate_limit(mut self, limit: u32) -> Self {
        self.finnhub_rate_limit = Some(limit);
        self
    }

    /// Set the Gemini API key
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the Gemini model identifier
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = Some(model.into());
        self
    }

    /// Set the WhatsApp bridge URL
    pub fn bridge_url(mut self, url: impl Into<String>) -> Self {
        self.bridge_url = Some(url.into());
        self
    }

    /// Set the candle resolution
    pub fn candle_resolution(mut self, resolution: Resolution) -> Self {
        self.candle_resolution = Some(resolution);
        self
    }

    /// Set the candle lookback count
    pub fn candle_lookback(mut self, lookback: usize) -> Self {
        self.candle_lookback = Some(lookback);
        self
    }

    /// Set the quote cache TTL
    pub fn cache_ttl_realtime(mut self, ttl: Duration) -> Self {
        self.cache_ttl_realtime = Some(ttl);
        self
    }

    /// Set the news cache TTL
    pub fn cache_ttl_news(mut self, ttl: Duration) -> Self {
        self.cache_ttl_news = Some(ttl);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        let config = AppConfig {
            finnhub_api_key: self.finnhub_api_key.unwrap_or_default(),
            finnhub_rate_limit: self.finnhub_rate_limit.unwrap_or(60),
            gemini_api_key: self.gemini_api_key.unwrap_or_default(),
            gemini_model: self.gemini_model,
            bridge_url: self.bridge_url,
            candle_resolution: self.candle_resolution.unwrap_or_default(),
            candle_lookback: self.candle_lookback.unwrap_or(DEFAULT_CANDLE_LOOKBACK),
            cache_ttl_realtime: self.cache_ttl_realtime.unwrap_or(Duration::from_secs(60)),
            cache_ttl_news: self.cache_ttl_news.unwrap_or(Duration::from_secs(300)),
        };

        config.validate()?;
        Ok(config)
    }
}
