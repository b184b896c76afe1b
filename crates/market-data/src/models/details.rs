//! Aggregated payloads assembled by the stock detail service.

use serde::{Deserialize, Serialize};

use super::news::MarketNewsArticle;
use super::profile::{BasicFinancials, CompanyProfile, StockExecutive};
use super::quote::{CandleSeries, StockQuote};

/// Quote summary for a peer company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerStockPerformance {
    pub symbol: String,
    pub company_name: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl PeerStockPerformance {
    /// Placeholder used when the peer's quote could not be fetched.
    pub fn unavailable(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            company_name: symbol.to_string(),
            current_price: 0.0,
            change: 0.0,
            change_percent: 0.0,
        }
    }
}

/// Everything the stock detail page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetailPayload {
    /// Normalized API symbol the data was fetched for
    pub symbol: String,
    /// TradingView spelling of the same symbol, for the chart widgets
    pub trading_view_symbol: String,
    pub quote: Option<StockQuote>,
    pub profile: Option<CompanyProfile>,
    /// Present only when the provider answered with status `"ok"`
    pub historical: Option<CandleSeries>,
    pub metrics: BasicFinancials,
    pub news: Vec<MarketNewsArticle>,
    pub peers: Vec<PeerStockPerformance>,
    pub executives: Vec<StockExecutive>,
}

/// Row of the watchlist table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistQuoteSnapshot {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(rename = "high52Week", skip_serializing_if = "Option::is_none")]
    pub high_52_week: Option<f64>,
    #[serde(rename = "low52Week", skip_serializing_if = "Option::is_none")]
    pub low_52_week: Option<f64>,
    /// Ten-day average trading volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Market capitalization in currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl WatchlistQuoteSnapshot {
    pub fn zeroed(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: 0.0,
            change: 0.0,
            change_percent: 0.0,
            high_52_week: None,
            low_52_week: None,
            volume: None,
            market_cap: None,
            sector: None,
        }
    }
}
