//! Symbol normalization

/// Common company-name inputs mapped to their tickers
const ALIASES: &[(&str, &str)] = &[
    ("TESLA", "TSLA"),
    ("GOOGLE", "GOOGL"),
    ("FACEBOOK", "META"),
];

/// Normalize user input into a ticker symbol: trim, uppercase, and map
/// a handful of common company names people type instead of tickers.
pub fn normalize_symbol(input: &str) -> String {
    let clean = input.trim().to_uppercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == clean)
        .map_or(clean, |(_, ticker)| (*ticker).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_uppercases() {
        assert_eq!(normalize_symbol("  aapl "), "AAPL");
    }

    #[test]
    fn test_maps_company_names() {
        assert_eq!(normalize_symbol("tesla"), "TSLA");
        assert_eq!(normalize_symbol("Google"), "GOOGL");
        assert_eq!(normalize_symbol("FACEBOOK"), "META");
    }

    #[test]
    fn test_passes_through_tickers() {
        assert_eq!(normalize_symbol("MSFT"), "MSFT");
        assert_eq!(normalize_symbol("BRK.B"), "BRK.B");
    }
}
