//! Enrichment and analysis orchestration

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::stock_data::{AnalysisReport, StockData};
use crate::symbols::normalize_symbol;
use pulse_advisor::{AdvisoryProvider, AdvisoryRequest, GeminiConfig, GeminiProvider, Headline};
use pulse_alerts::{BridgeClient, format_analysis_alert};
use pulse_data::{
    CacheKey, CacheTiers, FinnhubClient, MarketDataSource, NewsArticle, Quote, Resolution,
};
use pulse_indicators::{IndicatorSnapshot, PriceSeries};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Fetches quotes and candles, computes indicators, and assembles the
/// enriched [`StockData`] record.
///
/// The data source is an explicitly passed handle — the service owns no
/// ambient global state. Quotes and news are cached; the price series is
/// deliberately rebuilt from a fresh candle response on every request.
pub struct StockDataService {
    source: Arc<dyn MarketDataSource>,
    cache: CacheTiers,
    resolution: Resolution,
    lookback: usize,
}

impl StockDataService {
    /// Create a service over a data source
    pub fn new(source: Arc<dyn MarketDataSource>, config: &AppConfig) -> Self {
        Self {
            source,
            cache: CacheTiers::new(config.cache_ttl_realtime, config.cache_ttl_news),
            resolution: config.candle_resolution,
            lookback: config.candle_lookback,
        }
    }

    /// Latest quote for a symbol, served from cache inside the TTL
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = normalize_symbol(symbol);
        let key = CacheKey::new(&symbol, "quote", serde_json::json!({}));

        let value = self
            .cache
            .realtime
            .get_or_fetch(key, || async {
                let quote = self.source.quote(&symbol).await?;
                Ok::<_, AppError>(serde_json::to_value(quote)?)
            })
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    /// Recent company news, served from cache inside the TTL
    pub async fn company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        let symbol = normalize_symbol(symbol);
        let key = CacheKey::new(&symbol, "company_news", serde_json::json!({}));

        let value = self
            .cache
            .news
            .get_or_fetch(key, || async {
                let news = self.source.company_news(&symbol).await?;
                Ok::<_, AppError>(serde_json::to_value(news)?)
            })
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    /// Fetch quote and candle history concurrently and join them into the
    /// enriched record.
    ///
    /// A quote failure fails the request. A candle failure (or candles the
    /// engine rejects) degrades to a record without indicators — the
    /// engine is simply not invoked for the missing input.
    #[instrument(skip(self))]
    pub async fn enrich(&self, symbol: &str) -> Result<StockData> {
        let symbol = normalize_symbol(symbol);

        let (quote, candles) = tokio::join!(
            self.quote(&symbol),
            self.source.candles(&symbol, self.resolution, self.lookback),
        );
        let quote = quote?;

        let indicators = match candles {
            Ok(candles) => match PriceSeries::from_closes(candles.close) {
                Ok(series) => IndicatorSnapshot::from_series(&series),
                Err(e) => {
                    warn!(%symbol, error = %e, "Candle data rejected; indicators unavailable");
                    IndicatorSnapshot::default()
                }
            },
            Err(e) => {
                warn!(%symbol, error = %e, "Candle fetch failed; indicators unavailable");
                IndicatorSnapshot::default()
            }
        };

        Ok(StockData::new(quote, indicators))
    }
}

/// Runs the full analysis flow: enrich, gather headlines, ask the
/// advisory provider for a verdict, and optionally relay it as an alert.
pub struct AnalysisService {
    data: StockDataService,
    advisor: Arc<dyn AdvisoryProvider>,
    bridge: Option<BridgeClient>,
}

impl AnalysisService {
    /// Assemble a service from parts
    pub fn new(
        data: StockDataService,
        advisor: Arc<dyn AdvisoryProvider>,
        bridge: Option<BridgeClient>,
    ) -> Self {
        Self {
            data,
            advisor,
            bridge,
        }
    }

    /// Production wiring: Finnhub source, Gemini advisor, optional bridge
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = Arc::new(FinnhubClient::new(
            config.finnhub_api_key.clone(),
            config.finnhub_rate_limit,
        ));

        let mut gemini_config = GeminiConfig::new(config.gemini_api_key.clone());
        if let Some(model) = &config.gemini_model {
            gemini_config = gemini_config.with_model(model.clone());
        }
        let advisor = Arc::new(GeminiProvider::with_config(gemini_config)?);

        let bridge = config
            .bridge_url
            .as_deref()
            .map(BridgeClient::new)
            .transpose()?;

        Ok(Self::new(
            StockDataService::new(source, config),
            advisor,
            bridge,
        ))
    }

    /// Direct access to the data service
    pub fn data(&self) -> &StockDataService {
        &self.data
    }

    /// Enrich the symbol and produce an advisory verdict.
    ///
    /// The enriched record and the news fetch run concurrently; a news
    /// failure degrades to an empty headline list rather than failing
    /// the analysis.
    #[instrument(skip(self))]
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisReport> {
        let symbol = normalize_symbol(symbol);

        let (stock, news) = tokio::join!(self.data.enrich(&symbol), self.data.company_news(&symbol));
        let stock = stock?;
        let headlines: Vec<Headline> = match news {
            Ok(articles) => articles
                .into_iter()
                .map(|article| Headline {
                    headline: article.headline,
                    source: article.source,
                })
                .collect(),
            Err(e) => {
                warn!(%symbol, error = %e, "News fetch failed; analyzing without headlines");
                Vec::new()
            }
        };
        let headlines_considered = headlines.len();

        let request = AdvisoryRequest {
            symbol: symbol.clone(),
            stock: serde_json::to_value(&stock)?,
            headlines,
        };
        let advisory = self.advisor.advise(&request).await?;

        Ok(AnalysisReport {
            symbol,
            stock,
            advisory,
            headlines_considered,
        })
    }

    /// Analyze and relay the verdict to a WhatsApp recipient
    pub async fn analyze_and_alert(&self, symbol: &str, recipient: &str) -> Result<AnalysisReport> {
        let bridge = self.bridge.as_ref().ok_or_else(|| {
            AppError::Config("alerts requested but no WhatsApp bridge configured".to_string())
        })?;

        let report = self.analyze(symbol).await?;
        let message = format_analysis_alert(&report.symbol, report.stock.price, &report.advisory);
        bridge.send(recipient, &message).await?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use pulse_advisor::{Advisory, AdvisorError, RiskLevel, Signal};
    use pulse_data::{CandleSet, DataError};

    mock! {
        Source {}

        #[async_trait]
        impl MarketDataSource for Source {
            async fn quote(&self, symbol: &str) -> pulse_data::Result<Quote>;
            async fn candles(
                &self,
                symbol: &str,
                resolution: Resolution,
                lookback_count: usize,
            ) -> pulse_data::Result<CandleSet>;
            async fn company_news(&self, symbol: &str) -> pulse_data::Result<Vec<NewsArticle>>;
        }
    }

    mock! {
        Advisor {}

        #[async_trait]
        impl AdvisoryProvider for Advisor {
            async fn advise(&self, request: &AdvisoryRequest) -> pulse_advisor::Result<Advisory>;
            fn name(&self) -> &str;
        }
    }

    fn config() -> AppConfig {
        AppConfig::builder()
            .finnhub_api_key("fh-key")
            .gemini_api_key("gm-key")
            .build()
            .expect("valid config")
    }

    fn quote(symbol: &str) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price: 150.25,
            change: 1.25,
            change_percent: 0.84,
            high: 151.0,
            low: 148.5,
            open: 149.0,
            prev_close: 149.0,
        }
    }

    fn candles(symbol: &str, count: usize) -> CandleSet {
        let close: Vec<f64> = (0..count).map(|i| 150.0 + (i % 9) as f64).collect();
        CandleSet {
            symbol: symbol.to_string(),
            high: close.iter().map(|c| c + 1.0).collect(),
            low: close.iter().map(|c| c - 1.0).collect(),
            open: close.clone(),
            timestamps: (0..count as i64).map(|i| 1_700_000_000 + i * 86_400).collect(),
            volume: vec![],
            close,
        }
    }

    fn advisory() -> Advisory {
        Advisory {
            signal: Signal::Hold,
            confidence: 55.0,
            reasoning: vec!["Mixed signals".to_string()],
            short_term_outlook: "Sideways".to_string(),
            risk_level: RiskLevel::Low,
        }
    }

    fn article(headline: &str) -> NewsArticle {
        NewsArticle {
            category: "company".to_string(),
            datetime: 1_700_000_000,
            headline: headline.to_string(),
            id: 1,
            image: String::new(),
            related: "AAPL".to_string(),
            source: "Newswire".to_string(),
            summary: String::new(),
            url: "https://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_enrich_with_full_history() {
        let mut source = MockSource::new();
        source
            .expect_quote()
            .withf(|s| s == "AAPL")
            .returning(|s| Ok(quote(s)));
        source
            .expect_candles()
            .returning(|s, _, count| Ok(candles(s, count)));

        let service = StockDataService::new(Arc::new(source), &config());
        let stock = service.enrich("aapl").await.expect("enriched");

        assert_eq!(stock.symbol, "AAPL");
        assert!(stock.rsi.is_some());
        assert!(stock.macd.is_some());
    }

    #[tokio::test]
    async fn test_enrich_degrades_without_candles() {
        let mut source = MockSource::new();
        source.expect_quote().returning(|s| Ok(quote(s)));
        source.expect_candles().returning(|s, _, _| {
            Err(DataError::NoData {
                symbol: s.to_string(),
                reason: "provider returned no_data".to_string(),
            })
        });

        let service = StockDataService::new(Arc::new(source), &config());
        let stock = service.enrich("AAPL").await.expect("quote still enriches");

        assert!(!stock.has_indicators());
        let json = serde_json::to_value(&stock).expect("serializable");
        assert!(json.get("rsi").is_none());
        assert!(json.get("macd").is_none());
    }

    #[tokio::test]
    async fn test_enrich_degrades_on_corrupt_candles() {
        let mut source = MockSource::new();
        source.expect_quote().returning(|s| Ok(quote(s)));
        source.expect_candles().returning(|s, _, _| {
            let mut set = candles(s, 60);
            set.close[10] = f64::NAN;
            Ok(set)
        });

        let service = StockDataService::new(Arc::new(source), &config());
        let stock = service.enrich("AAPL").await.expect("quote still enriches");
        assert!(!stock.has_indicators());
    }

    #[tokio::test]
    async fn test_quote_failure_is_fatal() {
        let mut source = MockSource::new();
        source
            .expect_quote()
            .returning(|s| Err(DataError::SymbolNotFound(s.to_string())));
        source
            .expect_candles()
            .returning(|s, _, count| Ok(candles(s, count)));

        let service = StockDataService::new(Arc::new(source), &config());
        let err = service.enrich("NOPE").await.unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::SymbolNotFound(_))));
    }

    #[tokio::test]
    async fn test_quote_is_cached() {
        let mut source = MockSource::new();
        source
            .expect_quote()
            .times(1)
            .returning(|s| Ok(quote(s)));

        let service = StockDataService::new(Arc::new(source), &config());
        let first = service.quote("AAPL").await.expect("first fetch");
        let second = service.quote("AAPL").await.expect("served from cache");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_symbol_normalized_before_fetch() {
        let mut source = MockSource::new();
        source
            .expect_quote()
            .withf(|s| s == "TSLA")
            .returning(|s| Ok(quote(s)));

        let service = StockDataService::new(Arc::new(source), &config());
        let result = service.quote("tesla").await.expect("alias resolved");
        assert_eq!(result.symbol, "TSLA");
    }

    #[tokio::test]
    async fn test_analyze_produces_report() {
        let mut source = MockSource::new();
        source.expect_quote().returning(|s| Ok(quote(s)));
        source
            .expect_candles()
            .returning(|s, _, count| Ok(candles(s, count)));
        source
            .expect_company_news()
            .returning(|_| Ok(vec![article("Apple beats estimates")]));

        let mut advisor = MockAdvisor::new();
        advisor.expect_advise().returning(|request| {
            assert!(request.stock.get("rsi").is_some());
            Ok(advisory())
        });

        let service = AnalysisService::new(
            StockDataService::new(Arc::new(source), &config()),
            Arc::new(advisor),
            None,
        );
        let report = service.analyze("AAPL").await.expect("analysis completes");

        assert_eq!(report.symbol, "AAPL");
        assert_eq!(report.headlines_considered, 1);
        assert_eq!(report.advisory.signal, Signal::Hold);
    }

    #[tokio::test]
    async fn test_analyze_survives_news_failure() {
        let mut source = MockSource::new();
        source.expect_quote().returning(|s| Ok(quote(s)));
        source
            .expect_candles()
            .returning(|s, _, count| Ok(candles(s, count)));
        source.expect_company_news().returning(|_| {
            Err(DataError::Api {
                status: 500,
                body: "upstream down".to_string(),
            })
        });

        let mut advisor = MockAdvisor::new();
        advisor.expect_advise().returning(|_| Ok(advisory()));

        let service = AnalysisService::new(
            StockDataService::new(Arc::new(source), &config()),
            Arc::new(advisor),
            None,
        );
        let report = service.analyze("AAPL").await.expect("degrades to no headlines");
        assert_eq!(report.headlines_considered, 0);
    }

    #[tokio::test]
    async fn test_advisor_failure_propagates() {
        let mut source = MockSource::new();
        source.expect_quote().returning(|s| Ok(quote(s)));
        source
            .expect_candles()
            .returning(|s, _, count| Ok(candles(s, count)));
        source.expect_company_news().returning(|_| Ok(vec![]));

        let mut advisor = MockAdvisor::new();
        advisor
            .expect_advise()
            .returning(|_| Err(AdvisorError::AuthenticationFailed));

        let service = AnalysisService::new(
            StockDataService::new(Arc::new(source), &config()),
            Arc::new(advisor),
            None,
        );
        let err = service.analyze("AAPL").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Advisor(AdvisorError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn test_alert_without_bridge_is_config_error() {
        let source = MockSource::new();
        let advisor = MockAdvisor::new();
        let service = AnalysisService::new(
            StockDataService::new(Arc::new(source), &config()),
            Arc::new(advisor),
            None,
        );

        let err = service
            .analyze_and_alert("AAPL", "14155552671")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
