//! Exponential moving average

use crate::error::{IndicatorError, Result};

/// Compute the exponential moving average of `values` with the given span.
///
/// The smoothing factor is `alpha = 2 / (span + 1)` and the average is
/// seeded from the first sample (`ema[0] = values[0]`), not from a simple
/// average of the leading window. The MACD computation relies on every EMA
/// it builds using this same seeding; see [`crate::macd`].
///
/// Returns one output per input. An empty input yields an empty output.
pub fn ema(values: &[f64], span: usize) -> Result<Vec<f64>> {
    if span == 0 {
        return Err(IndicatorError::InvalidParameter(
            "ema span must be >= 1".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(values.len());
    let Some(&first) = values.first() else {
        return Ok(out);
    };

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = first;
    out.push(prev);
    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }

    Ok(out)
}
