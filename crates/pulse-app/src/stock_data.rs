//! The enriched stock record

use pulse_advisor::Advisory;
use pulse_data::Quote;
use pulse_indicators::{IndicatorSnapshot, Macd};
use serde::{Deserialize, Serialize};

/// Quote fields plus any defined indicators — the hand-off payload for
/// the advisory formatter.
///
/// Indicator fields are omitted from JSON when undefined; a reader must
/// never mistake "not enough history" for an RSI of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub prev_close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<Macd>,
}

impl StockData {
    /// Attach an indicator snapshot to a quote
    pub fn new(quote: Quote, indicators: IndicatorSnapshot) -> Self {
        Self {
            symbol: quote.symbol,
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            high: quote.high,
            low: quote.low,
            open: quote.open,
            prev_close: quote.prev_close,
            rsi: indicators.rsi,
            macd: indicators.macd,
        }
    }

    /// Whether any indicator made it into the record
    pub fn has_indicators(&self) -> bool {
        self.rsi.is_some() || self.macd.is_some()
    }
}

/// The full analysis output returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub stock: StockData,
    pub advisory: Advisory,
    /// How many headlines the advisory actually saw
    pub headlines_considered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            price: 150.25,
            change: 1.25,
            change_percent: 0.84,
            high: 151.0,
            low: 148.5,
            open: 149.0,
            prev_close: 149.0,
        }
    }

    #[test]
    fn test_json_omits_absent_indicators() {
        let data = StockData::new(quote(), IndicatorSnapshot::default());
        let json = serde_json::to_value(&data).expect("serializable");

        assert_eq!(json["prevClose"], 149.0);
        assert_eq!(json["changePercent"], 0.84);
        assert!(json.get("rsi").is_none());
        assert!(json.get("macd").is_none());
        assert!(!data.has_indicators());
    }

    #[test]
    fn test_json_includes_defined_indicators() {
        let snapshot = IndicatorSnapshot {
            rsi: Some(48.4),
            macd: None,
        };
        let data = StockData::new(quote(), snapshot);
        let json = serde_json::to_value(&data).expect("serializable");

        assert_eq!(json["rsi"], 48.4);
        assert!(json.get("macd").is_none());
        assert!(data.has_indicators());
    }
}
