//! Typed market data records

use serde::{Deserialize, Serialize};

/// Point-in-time quote, normalized from the provider's single-letter fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub prev_close: f64,
}

/// Candle resolution accepted by the candle endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Resolution {
    Minute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl Resolution {
    /// Wire value expected by the provider
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "1",
            Self::FiveMinutes => "5",
            Self::FifteenMinutes => "15",
            Self::ThirtyMinutes => "30",
            Self::Hour => "60",
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
        }
    }

    /// Parse the provider's wire value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::Minute),
            "5" => Some(Self::FiveMinutes),
            "15" => Some(Self::FifteenMinutes),
            "30" => Some(Self::ThirtyMinutes),
            "60" => Some(Self::Hour),
            "D" => Some(Self::Day),
            "W" => Some(Self::Week),
            "M" => Some(Self::Month),
            _ => None,
        }
    }
}

/// OHLC candle history as the provider ships it: parallel arrays,
/// oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSet {
    pub symbol: String,
    pub close: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub open: Vec<f64>,
    pub timestamps: Vec<i64>,
    #[serde(default)]
    pub volume: Vec<f64>,
}

impl CandleSet {
    /// Number of candles in the set
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether the set holds no candles
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}

/// Company or market news article (provider's company-news schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Article category
    pub category: String,
    /// Publish time (UNIX timestamp)
    pub datetime: i64,
    /// News headline
    pub headline: String,
    /// Unique article ID
    pub id: i64,
    /// Thumbnail image URL
    #[serde(default)]
    pub image: String,
    /// Related symbols
    #[serde(default)]
    pub related: String,
    /// News source
    pub source: String,
    /// Article summary
    #[serde(default)]
    pub summary: String,
    /// Article URL
    pub url: String,
}

/// Symbol search result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    #[serde(rename = "displaySymbol")]
    pub display_symbol: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub security_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_round_trip() {
        for resolution in [
            Resolution::Minute,
            Resolution::FiveMinutes,
            Resolution::FifteenMinutes,
            Resolution::ThirtyMinutes,
            Resolution::Hour,
            Resolution::Day,
            Resolution::Week,
            Resolution::Month,
        ] {
            assert_eq!(Resolution::parse(resolution.as_str()), Some(resolution));
        }
        assert_eq!(Resolution::parse("2h"), None);
    }

    #[test]
    fn test_candle_set_len() {
        let candles = CandleSet {
            symbol: "AAPL".to_string(),
            close: vec![150.0, 151.0],
            high: vec![151.0, 152.0],
            low: vec![149.0, 150.0],
            open: vec![149.5, 150.5],
            timestamps: vec![1_700_000_000, 1_700_086_400],
            volume: vec![],
        };
        assert_eq!(candles.len(), 2);
        assert!(!candles.is_empty());
    }

    #[test]
    fn test_symbol_match_wire_names() {
        let parsed: SymbolMatch = serde_json::from_value(serde_json::json!({
            "symbol": "TSLA",
            "displaySymbol": "TSLA",
            "description": "TESLA INC",
            "type": "Common Stock"
        }))
        .expect("valid match");
        assert_eq!(parsed.display_symbol, "TSLA");
        assert_eq!(parsed.security_type, "Common Stock");
    }
}
