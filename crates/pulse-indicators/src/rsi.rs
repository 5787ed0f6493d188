//! Relative Strength Index

use crate::error::{IndicatorError, Result};

/// Default RSI lookback period
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute the Wilder RSI over a closing-price series, oldest first.
///
/// Returns the most recent value of the rolling RSI series, in `[0, 100]`.
/// The computation walks the whole series to warm up the smoothing state,
/// but only the last value is of interest to callers.
///
/// Smoothing convention: the first average gain/loss is the simple mean of
/// the first `period` deltas, and every later step applies Wilder's
/// recursive smoothing `avg = (avg * (period - 1) + current) / period`.
///
/// When the average loss is zero (all moves are gains — this includes a
/// perfectly flat series) RS diverges and the RSI saturates to exactly
/// `100.0`.
///
/// A series with fewer than `period + 1` samples has no defined RSI and
/// yields `Ok(None)`; callers must treat that as "indicator unavailable",
/// not as an error and not as zero.
pub fn rsi(prices: &[f64], period: usize) -> Result<Option<f64>> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "rsi period must be >= 1".to_string(),
        ));
    }
    if prices.len() <= period {
        return Ok(None);
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for window in prices.windows(2) {
        let delta = window[1] - window[0];
        if delta > 0.0 {
            gains.push(delta);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-delta);
        }
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Ok(Some(100.0));
    }

    let rs = avg_gain / avg_loss;
    Ok(Some(100.0 - 100.0 / (1.0 + rs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            rsi(&[1.0, 2.0, 3.0], 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_undefined_below_warmup() {
        // len <= period is undefined, never an error
        for len in 0..=14 {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            assert_eq!(rsi(&prices, 14).unwrap(), None, "len {len}");
        }
    }

    #[test]
    fn test_defined_at_exact_minimum() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        assert!(rsi(&prices, 14).unwrap().is_some());
    }

    #[test]
    fn test_all_gains_saturates_to_100() {
        // 81 strictly increasing closes: no losses at all
        let prices: Vec<f64> = (100..=180).map(f64::from).collect();
        let value = rsi(&prices, 14).unwrap().unwrap();
        assert_eq!(value, 100.0);
        assert!(value > 95.0);
    }

    #[test]
    fn test_all_losses_approaches_zero() {
        let prices: Vec<f64> = (100..=180).rev().map(f64::from).collect();
        let value = rsi(&prices, 14).unwrap().unwrap();
        assert_eq!(value, 0.0);
        assert!(value < 5.0);
    }

    #[test]
    fn test_flat_series_sentinel() {
        // Degenerate case: no gains and no losses. Documented convention is
        // saturation to 100, per the zero-average-loss rule.
        let value = rsi(&[150.0; 40], 14).unwrap().unwrap();
        assert!(!value.is_nan());
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_result_in_unit_range() {
        let prices = [
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ];
        let value = rsi(&prices, 14).unwrap().unwrap();
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn test_idempotent() {
        let prices: Vec<f64> = (0..60).map(|i| 150.0 + (i % 7) as f64).collect();
        let first = rsi(&prices, 14).unwrap();
        let second = rsi(&prices, 14).unwrap();
        assert_eq!(first, second);
    }
}
