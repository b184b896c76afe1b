//! Search result models for symbol lookup.

use serde::{Deserialize, Serialize};

/// Individual hit from the `/search` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSearchHit {
    /// Full description/name
    #[serde(default)]
    pub description: String,
    /// Display symbol
    #[serde(default)]
    pub display_symbol: String,
    /// Symbol for API calls
    #[serde(default)]
    pub symbol: String,
    /// Security type (e.g., "Common Stock", "ETF")
    #[serde(default, rename = "type")]
    pub security_type: String,
}

/// Search result shaped for the search command palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchResult {
    /// Upper-cased symbol (e.g., "AAPL", "TCS.NS")
    pub symbol: String,

    /// Display name; the symbol itself when the provider had none
    pub name: String,

    /// Listing exchange, `"US"` when unknown
    pub exchange: String,

    /// Security type, `"Stock"` when unknown
    #[serde(rename = "type")]
    pub asset_type: String,

    pub is_in_watchlist: bool,
}

impl StockSearchResult {
    pub const DEFAULT_EXCHANGE: &'static str = "US";
    pub const DEFAULT_TYPE: &'static str = "Stock";

    pub fn new(
        symbol: &str,
        name: Option<&str>,
        exchange: Option<&str>,
        asset_type: Option<&str>,
    ) -> Self {
        let symbol = symbol.trim().to_uppercase();
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            name: pick(name, &symbol),
            exchange: pick(exchange, Self::DEFAULT_EXCHANGE),
            asset_type: pick(asset_type, Self::DEFAULT_TYPE),
            symbol,
            is_in_watchlist: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_parsing() {
        let json = r#"{
            "description": "APPLE INC",
            "displaySymbol": "AAPL",
            "symbol": "AAPL",
            "type": "Common Stock"
        }"#;
        let hit: SymbolSearchHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.security_type, "Common Stock");
        assert_eq!(hit.display_symbol, "AAPL");
    }

    #[test]
    fn test_result_defaults() {
        let result = StockSearchResult::new("shop.to", None, Some(""), None);
        assert_eq!(result.symbol, "SHOP.TO");
        assert_eq!(result.name, "SHOP.TO");
        assert_eq!(result.exchange, "US");
        assert_eq!(result.asset_type, "Stock");
        assert!(!result.is_in_watchlist);
    }

    #[test]
    fn test_result_serializes_type_field() {
        let result = StockSearchResult::new("AAPL", Some("Apple Inc"), Some("NASDAQ"), Some("ETF"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "ETF");
        assert_eq!(json["isInWatchlist"], false);
    }
}
