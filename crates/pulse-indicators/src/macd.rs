//! Moving Average Convergence Divergence

use crate::ema::ema;
use crate::error::{IndicatorError, Result};
use serde::{Deserialize, Serialize};

/// MACD period configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    /// Span of the fast EMA
    pub fast: usize,
    /// Span of the slow EMA
    pub slow: usize,
    /// Span of the signal-line EMA over the MACD line
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdParams {
    /// Minimum number of samples before the MACD triple is defined
    pub fn min_samples(&self) -> usize {
        self.slow + self.signal
    }

    fn validate(&self) -> Result<()> {
        if self.fast == 0 || self.slow == 0 || self.signal == 0 {
            return Err(IndicatorError::InvalidParameter(
                "macd periods must be >= 1".to_string(),
            ));
        }
        if self.fast >= self.slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "macd fast period ({}) must be shorter than slow period ({})",
                self.fast, self.slow
            )));
        }
        Ok(())
    }
}

/// The latest MACD triple; `histogram = macd - signal` by construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Compute the MACD triple over a closing-price series, oldest first.
///
/// The MACD line is the gap between a fast and a slow EMA of the prices;
/// the signal line is an EMA of the MACD line itself. All three EMAs are
/// seeded from their input's first sample ([`ema`]) — mixing seeding
/// strategies between them would corrupt the histogram.
///
/// Only the latest `(macd, signal, histogram)` triple is returned. A
/// series shorter than `slow + signal` samples yields `Ok(None)`:
/// indicator unavailable, not an error.
pub fn macd(prices: &[f64], params: &MacdParams) -> Result<Option<Macd>> {
    params.validate()?;

    if prices.len() < params.min_samples() {
        return Ok(None);
    }

    let ema_fast = ema(prices, params.fast)?;
    let ema_slow = ema(prices, params.slow)?;
    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = ema(&macd_line, params.signal)?;

    // Non-empty by the length check above
    let (Some(&macd_last), Some(&signal_last)) = (macd_line.last(), signal_line.last()) else {
        return Ok(None);
    };

    Ok(Some(Macd {
        macd: macd_last,
        signal: signal_last,
        histogram: macd_last - signal_last,
    }))
}
