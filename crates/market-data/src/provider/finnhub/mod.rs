//! Finnhub market data provider implementation.
//!
//! This module provides market data from Finnhub API:
//! - Quotes via /quote and daily candles via /stock/candle
//! - Company profiles, metrics, peers and executives via /stock/*
//! - Company and general news via /company-news and /news
//! - Symbol search via /search
//!
//! Finnhub free tier is limited to 60 API calls per minute.
//! API documentation: https://finnhub.io/docs/api

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::MarketDataConfig;
use crate::errors::{MarketDataError, Result};
use crate::models::{
    BasicFinancials, CandleSeries, CompanyProfile, ExecutivesResponse, RawNewsArticle,
    StockExecutive, StockQuote, SymbolSearchHit,
};
use crate::provider::StockDataProvider;

const PROVIDER_ID: &str = "FINNHUB";

/// Response from /search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolSearchHit>,
}

/// Error response from Finnhub
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Finnhub market data provider.
///
/// Free tier is limited to 60 API calls per minute.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubProvider {
    pub fn new(config: MarketDataConfig) -> Self {
        Self {
            client: build_client(config.request_timeout),
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    /// Build a provider from `.env` / process environment.
    pub fn from_env() -> Result<Self> {
        MarketDataConfig::from_env().map(Self::new)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request to the Finnhub API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = self.url(endpoint);

        // API key travels as a header, never in the query string
        let request = self
            .client
            .get(&url)
            .header("X-Finnhub-Token", &self.api_key)
            .query(params);

        debug!(
            "Finnhub request: {} with {} params",
            endpoint,
            params.len()
        );

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = error_for_status(status, &body);
            warn!("Finnhub {} failed: {}", endpoint, error);
            return Err(error);
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let text = self.fetch(endpoint, params).await?;
        parse_body(endpoint, &text)
    }
}

/// HTTP client with the configured timeout, or reqwest's defaults when the
/// builder fails.
fn build_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
        warn!(
            "Failed to build Finnhub client with {:?} timeout, using defaults: {}",
            timeout, e
        );
        Client::new()
    })
}

/// Map a non-success HTTP status to an error.
fn error_for_status(status: StatusCode, body: &str) -> MarketDataError {
    match status {
        // 403 is what Finnhub answers once the key's quota is spent
        StatusCode::TOO_MANY_REQUESTS | StatusCode::FORBIDDEN => MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        },
        StatusCode::UNAUTHORIZED => MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: "Invalid or missing API key".to_string(),
        },
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .and_then(|resp| resp.error)
                .unwrap_or_else(|| format!("HTTP {} - {}", status, body));
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            }
        }
    }
}

fn parse_body<T: DeserializeOwned>(endpoint: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: format!("Failed to parse {} response: {}", endpoint, e),
    })
}

#[async_trait]
impl StockDataProvider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn quote(&self, symbol: &str) -> Result<StockQuote> {
        self.fetch_json("/quote", &[("symbol", symbol)]).await
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        self.fetch_json("/stock/profile2", &[("symbol", symbol)])
            .await
    }

    async fn candles(&self, symbol: &str, from: i64, to: i64) -> Result<CandleSeries> {
        let from = from.to_string();
        let to = to.to_string();
        let params = [
            ("symbol", symbol),
            ("resolution", "D"),
            ("from", from.as_str()),
            ("to", to.as_str()),
        ];
        self.fetch_json("/stock/candle", &params).await
    }

    async fn metrics(&self, symbol: &str) -> Result<BasicFinancials> {
        self.fetch_json("/stock/metric", &[("symbol", symbol), ("metric", "all")])
            .await
    }

    async fn peers(&self, symbol: &str) -> Result<Vec<String>> {
        self.fetch_json("/stock/peers", &[("symbol", symbol)]).await
    }

    async fn executives(&self, symbol: &str) -> Result<Vec<StockExecutive>> {
        let response: ExecutivesResponse = self
            .fetch_json("/stock/executive", &[("symbol", symbol)])
            .await?;
        Ok(response.into_vec())
    }

    async fn company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawNewsArticle>> {
        let from = from.format("%Y-%m-%d").to_string();
        let to = to.format("%Y-%m-%d").to_string();
        let params = [
            ("symbol", symbol),
            ("from", from.as_str()),
            ("to", to.as_str()),
        ];
        self.fetch_json("/company-news", &params).await
    }

    async fn general_news(&self) -> Result<Vec<RawNewsArticle>> {
        self.fetch_json("/news", &[("category", "general")]).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SymbolSearchHit>> {
        let response: SearchResponse = self.fetch_json("/search", &[("q", query)]).await?;
        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> FinnhubProvider {
        let mut config = MarketDataConfig::new("test-key");
        config.base_url = "http://localhost:9".to_string();
        FinnhubProvider::new(config)
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider().id(), "FINNHUB");
    }

    #[test]
    fn test_build_client_accepts_configured_timeouts() {
        for secs in [0, 5, 30] {
            let _client = build_client(Duration::from_secs(secs));
        }
        let mut config = MarketDataConfig::new("test-key");
        config.request_timeout = Duration::from_millis(250);
        assert_eq!(FinnhubProvider::new(config).id(), "FINNHUB");
    }

    #[test]
    fn test_url_uses_configured_base() {
        assert_eq!(provider().url("/quote"), "http://localhost:9/quote");
    }

    #[test]
    fn test_rate_limit_statuses() {
        for status in [StatusCode::TOO_MANY_REQUESTS, StatusCode::FORBIDDEN] {
            assert!(matches!(
                error_for_status(status, ""),
                MarketDataError::RateLimited { .. }
            ));
        }
    }

    #[test]
    fn test_unauthorized_status() {
        match error_for_status(StatusCode::UNAUTHORIZED, "") {
            MarketDataError::ProviderError { message, .. } => {
                assert_eq!(message, "Invalid or missing API key")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_body_message() {
        let error = error_for_status(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Symbol is required"}"#,
        );
        match error {
            MarketDataError::ProviderError { message, .. } => {
                assert_eq!(message, "Symbol is required")
            }
            other => panic!("unexpected error: {:?}", other),
        }

        match error_for_status(StatusCode::BAD_GATEWAY, "upstream down") {
            MarketDataError::ProviderError { message, .. } => {
                assert!(message.contains("502"));
                assert!(message.contains("upstream down"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_quote_response_parsing() {
        let json = r#"{
            "c": 261.74,
            "h": 263.31,
            "l": 260.68,
            "o": 261.07,
            "pc": 259.45,
            "t": 1582641000,
            "d": 2.29,
            "dp": 0.8826
        }"#;

        let quote: StockQuote = parse_body("/quote", json).unwrap();
        assert_eq!(quote.c, Some(261.74));
        assert_eq!(quote.pc, Some(259.45));
        assert_eq!(quote.t, Some(1582641000));
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "count": 2,
            "result": [
                {"description": "APPLE INC", "displaySymbol": "AAPL", "symbol": "AAPL", "type": "Common Stock"},
                {"description": "APPLE INC", "displaySymbol": "AAPL.SW", "symbol": "AAPL.SW", "type": "Common Stock"}
            ]
        }"#;

        let response: SearchResponse = parse_body("/search", json).unwrap();
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.result[1].symbol, "AAPL.SW");
    }

    #[test]
    fn test_parse_failure_is_provider_error() {
        let result: Result<Vec<String>> = parse_body("/stock/peers", "not json");
        match result {
            Err(MarketDataError::ProviderError { message, .. }) => {
                assert!(message.contains("/stock/peers"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
