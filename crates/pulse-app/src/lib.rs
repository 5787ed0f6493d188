//! Application orchestration
//!
//! Wires the market data layer, indicator engine, advisory formatter,
//! and alert relay into the two flows the dashboard exposes:
//!
//! - **Enrichment**: fetch quote and candle history concurrently, compute
//!   RSI/MACD over the closes, and join everything into a [`StockData`]
//!   record. A missing or failed candle fetch degrades to "indicators
//!   unavailable" — absent fields, never fabricated numbers.
//! - **Analysis**: enrichment plus recent headlines handed to the
//!   advisory provider for a buy/sell/hold verdict, optionally relayed
//!   as a WhatsApp alert.
//!
//! Collaborator handles are constructed from [`AppConfig`] and passed
//! explicitly; nothing in this crate is a global.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod stock_data;
pub mod symbols;

pub use config::{AppConfig, AppConfigBuilder, DEFAULT_CANDLE_LOOKBACK};
pub use error::{AppError, Result};
pub use logging::init_tracing;
pub use service::{AnalysisService, StockDataService};
pub use stock_data::{AnalysisReport, StockData};
pub use symbols::normalize_symbol;
