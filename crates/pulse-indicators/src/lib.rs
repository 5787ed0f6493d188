//! Technical indicator engine
//!
//! Pure, stateless computation of RSI and MACD over an ordered
//! closing-price series. The engine does no I/O, holds no shared state,
//! and is safe to call from any number of concurrent request contexts.
//!
//! Two rules shape the API:
//!
//! - A series that is too short for an indicator's warm-up window is not
//!   an error. Those computations return `Ok(None)`, and the serialized
//!   form omits the field entirely rather than emitting a sentinel value.
//! - Invalid parameters (a zero period, a MACD fast span that is not
//!   shorter than the slow span) are programmer errors and fail loudly
//!   with [`IndicatorError::InvalidParameter`].
//!
//! Smoothing conventions are pinned and documented on each function:
//! Wilder-seeded RSI (simple-average seed, recursive smoothing) and
//! first-sample-seeded EMAs throughout the MACD stack.
//!
//! # Example
//!
//! ```
//! use pulse_indicators::{IndicatorSnapshot, PriceSeries};
//!
//! let closes: Vec<f64> = (0..60).map(|i| 150.0 + (i % 9) as f64).collect();
//! let series = PriceSeries::from_closes(closes)?;
//! let snapshot = IndicatorSnapshot::from_series(&series);
//! assert!(snapshot.rsi.is_some());
//! assert!(snapshot.macd.is_some());
//! # Ok::<(), pulse_indicators::IndicatorError>(())
//! ```

pub mod ema;
pub mod error;
pub mod macd;
pub mod rsi;
pub mod series;
pub mod snapshot;

pub use ema::ema;
pub use error::{IndicatorError, Result};
pub use macd::{Macd, MacdParams, macd};
pub use rsi::{DEFAULT_RSI_PERIOD, rsi};
pub use series::PriceSeries;
pub use snapshot::IndicatorSnapshot;
