//! Validated closing-price series

use crate::error::{IndicatorError, Result};

/// An ordered series of closing prices, oldest first.
///
/// Construction validates that every entry is finite and non-negative.
/// Chronological ordering is the caller's responsibility; the engine never
/// sorts. The series is immutable once built and is meant to be constructed
/// fresh from each upstream candle response.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from raw closing prices.
    ///
    /// Rejects NaN, infinite, and negative entries with
    /// [`IndicatorError::InvalidPrice`]. An empty series is valid; every
    /// indicator computed over it is simply undefined.
    pub fn from_closes(closes: Vec<f64>) -> Result<Self> {
        for (index, &value) in closes.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(IndicatorError::InvalidPrice {
                    index,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self { closes })
    }

    /// The underlying closes, oldest first
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close, if any
    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.closes
    }
}
