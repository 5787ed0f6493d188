//! Alert message formatting

use pulse_advisor::Advisory;

/// Render an analysis verdict as a WhatsApp message.
///
/// Uses the `*bold*`/`_italic_` markup WhatsApp renders natively.
pub fn format_analysis_alert(symbol: &str, price: f64, advisory: &Advisory) -> String {
    let reasoning = advisory
        .reasoning
        .iter()
        .map(|r| format!("• {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*AI Analysis for {symbol}*\n\n\
         *Signal:* {} (Confidence: {:.0}%)\n\
         *Risk Level:* {}\n\n\
         *Reasoning:*\n{reasoning}\n\n\
         *Outlook:* {}\n\n\
         _Current Price: ${price}_",
        advisory.signal, advisory.confidence, advisory.risk_level, advisory.short_term_outlook,
    )
}
