//! Point-in-time indicator snapshot

use crate::error::Result;
use crate::macd::{Macd, MacdParams, macd};
use crate::rsi::{DEFAULT_RSI_PERIOD, rsi};
use crate::series::PriceSeries;
use serde::{Deserialize, Serialize};

/// The indicator pair attached to a quote to form the enriched record.
///
/// Absent indicators serialize as missing fields, never as `0` or `null` —
/// a zero RSI reads as deeply oversold and must not be fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<Macd>,
}

impl IndicatorSnapshot {
    /// Compute both indicators with the default periods (RSI 14, MACD 12/26/9).
    ///
    /// The default periods are always valid, so a validated series cannot
    /// fail here; an undersized series just leaves both fields empty.
    pub fn from_series(series: &PriceSeries) -> Self {
        Self::compute(series, DEFAULT_RSI_PERIOD, &MacdParams::default())
            .unwrap_or_default()
    }

    /// Compute both indicators with explicit periods.
    pub fn compute(
        series: &PriceSeries,
        rsi_period: usize,
        macd_params: &MacdParams,
    ) -> Result<Self> {
        Ok(Self {
            rsi: rsi(series.closes(), rsi_period)?,
            macd: macd(series.closes(), macd_params)?,
        })
    }

    /// Whether any indicator is defined
    pub fn has_data(&self) -> bool {
        self.rsi.is_some() || self.macd.is_some()
    }
}
