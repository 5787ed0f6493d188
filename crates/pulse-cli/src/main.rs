//! Command-line interface for the stock-pulse dashboard

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use pulse_app::{AnalysisService, AppConfig, StockData};
use pulse_data::FinnhubClient;
use pulse_alerts::BridgeClient;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(about = "Stock analysis dashboard: quotes, indicators, AI advisory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the latest quote for a symbol
    Quote { symbol: String },

    /// Fetch candle history and print the technical indicators
    Indicators { symbol: String },

    /// Run the full AI analysis for a symbol
    Analyze {
        symbol: String,

        /// Relay the verdict to this WhatsApp number
        #[arg(long)]
        alert: Option<String>,
    },

    /// Recent company news, or market news when no symbol is given
    News {
        symbol: Option<String>,

        /// Market news category (general, forex, crypto, merger)
        #[arg(long, default_value = "general")]
        category: String,
    },

    /// Search for symbols matching a query
    Search { query: String },

    /// Send a raw WhatsApp message through the bridge
    Alert { number: String, message: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pulse_app::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("loading configuration from environment")?;

    match cli.command {
        Command::Quote { symbol } => {
            let service = AnalysisService::from_config(&config)?;
            let quote = service.data().quote(&symbol).await?;
            println!("{}", quote_table(&StockData::new(quote, Default::default())));
        }
        Command::Indicators { symbol } => {
            let service = AnalysisService::from_config(&config)?;
            let stock = service.data().enrich(&symbol).await?;
            println!("{}", quote_table(&stock));
            println!("{}", indicator_table(&stock));
        }
        Command::Analyze { symbol, alert } => {
            let service = AnalysisService::from_config(&config)?;
            let report = match alert {
                Some(number) => service.analyze_and_alert(&symbol, &number).await?,
                None => service.analyze(&symbol).await?,
            };

            println!("{}", quote_table(&report.stock));
            println!("{}", indicator_table(&report.stock));
            println!(
                "\nSignal: {} (confidence {:.0}%)",
                report.advisory.signal, report.advisory.confidence
            );
            println!("Risk level: {}", report.advisory.risk_level);
            println!("Reasoning:");
            for point in &report.advisory.reasoning {
                println!("  - {point}");
            }
            println!("Outlook: {}", report.advisory.short_term_outlook);
            info!(
                headlines = report.headlines_considered,
                "Analysis complete"
            );
        }
        Command::News { symbol, category } => {
            let client = FinnhubClient::new(config.finnhub_api_key.clone(), config.finnhub_rate_limit);
            let articles = match symbol {
                Some(symbol) => client.get_company_news(&symbol).await?,
                None => client.get_market_news(&category).await?,
            };
            for article in articles.iter().take(10) {
                println!("- {} ({})", article.headline, article.source);
            }
        }
        Command::Search { query } => {
            let client = FinnhubClient::new(config.finnhub_api_key.clone(), config.finnhub_rate_limit);
            let matches = client.search(&query).await?;
            let mut table = Table::new();
            table.set_header(vec!["Symbol", "Description", "Type"]);
            for entry in matches.iter().take(10) {
                table.add_row(vec![
                    entry.display_symbol.clone(),
                    entry.description.clone(),
                    entry.security_type.clone(),
                ]);
            }
            println!("{table}");
        }
        Command::Alert { number, message } => {
            let bridge_url = config
                .bridge_url
                .as_deref()
                .context("WHATSAPP_BRIDGE_URL is not configured")?;
            let bridge = BridgeClient::new(bridge_url)?;
            bridge.send(&number, &message).await?;
            println!("Alert sent to {number}");
        }
    }

    Ok(())
}

fn quote_table(stock: &StockData) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Symbol", "Price", "Change", "Change %", "High", "Low", "Open", "Prev Close",
    ]);
    table.add_row(vec![
        stock.symbol.clone(),
        format!("{:.2}", stock.price),
        format!("{:+.2}", stock.change),
        format!("{:+.2}%", stock.change_percent),
        format!("{:.2}", stock.high),
        format!("{:.2}", stock.low),
        format!("{:.2}", stock.open),
        format!("{:.2}", stock.prev_close),
    ]);
    table
}

/// Absent indicators render as N/A, never as a number
fn indicator_table(stock: &StockData) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["RSI (14)", "MACD", "Signal", "Histogram"]);

    let rsi = stock
        .rsi
        .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));
    let (macd, signal, histogram) = stock.macd.map_or_else(
        || ("N/A".to_string(), "N/A".to_string(), "N/A".to_string()),
        |m| {
            (
                format!("{:.4}", m.macd),
                format!("{:.4}", m.signal),
                format!("{:.4}", m.histogram),
            )
        },
    );

    table.add_row(vec![rsi, macd, signal, histogram]);
    table
}
