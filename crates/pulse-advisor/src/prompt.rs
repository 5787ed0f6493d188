//! Advisory prompt template

use crate::error::Result;
use crate::provider::AdvisoryRequest;
use minijinja::{Environment, context};

/// Headlines beyond this count add noise, not signal
const MAX_HEADLINES: usize = 5;

const ANALYST_PROMPT: &str = r#"You are an expert stock trading analyst AI.
Analyze the following data for stock: {{ symbol }}

Stock Data:
{{ stock_json }}

Recent News Headlines:
{% for item in headlines %}- {{ item.headline }} ({{ item.source }})
{% endfor %}
Provide a trading signal based on this data.
Return ONLY valid JSON in the following format, no markdown formatting:
{
  "signal": "BUY" | "SELL" | "HOLD",
  "confidence": number (0-100),
  "reasoning": ["point 1", "point 2", "point 3"],
  "shortTermOutlook": "string",
  "riskLevel": "Low" | "Medium" | "High"
}
"#;

/// Render the analyst prompt for a request.
///
/// The stock payload is pretty-printed JSON; absent indicator fields are
/// genuinely absent there, so the model never sees a fabricated zero.
pub fn render_analyst_prompt(request: &AdvisoryRequest) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("advisor.analyst", ANALYST_PROMPT)?;
    let template = env.get_template("advisor.analyst")?;

    let stock_json =
        serde_json::to_string_pretty(&request.stock).unwrap_or_else(|_| "{}".to_string());
    let headlines: Vec<_> = request.headlines.iter().take(MAX_HEADLINES).collect();

    Ok(template.render(context! {
        symbol => request.symbol,
        stock_json => stock_json,
        headlines => headlines,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Headline;

    fn request() -> AdvisoryRequest {
        AdvisoryRequest {
            symbol: "AAPL".to_string(),
            stock: serde_json::json!({"price": 150.0, "rsi": 48.4}),
            headlines: (0..8)
                .map(|i| Headline {
                    headline: format!("Headline {i}"),
                    source: "Newswire".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_prompt_contains_symbol_and_data() {
        let prompt = render_analyst_prompt(&request()).expect("renders");
        assert!(prompt.contains("stock: AAPL"));
        assert!(prompt.contains("\"rsi\": 48.4"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_headlines_capped_at_five() {
        let prompt = render_analyst_prompt(&request()).expect("renders");
        assert!(prompt.contains("Headline 4"));
        assert!(!prompt.contains("Headline 5"));
    }

    #[test]
    fn test_no_headlines_renders() {
        let mut req = request();
        req.headlines.clear();
        let prompt = render_analyst_prompt(&req).expect("renders");
        assert!(prompt.contains("Recent News Headlines:"));
    }
}
