//! Stock data provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::{
    BasicFinancials, CandleSeries, CompanyProfile, RawNewsArticle, StockExecutive, StockQuote,
    SymbolSearchHit,
};

/// Source of quotes, fundamentals and news for a single ticker.
///
/// Every method takes an already-normalized API symbol (`"AAPL"`,
/// `"TCS.NS"`, `"BTCUSDT"`). Normalization happens in the service layer,
/// never inside a provider.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockwatch_market_data::provider::StockDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl StockDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the lookups
/// }
/// ```
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Constant identifier like "FINNHUB", used in logs and errors.
    fn id(&self) -> &'static str;

    async fn quote(&self, symbol: &str) -> Result<StockQuote>;

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile>;

    /// Daily candles between two Unix timestamps (seconds, inclusive).
    async fn candles(&self, symbol: &str, from: i64, to: i64) -> Result<CandleSeries>;

    async fn metrics(&self, symbol: &str) -> Result<BasicFinancials>;

    /// Tickers of comparable companies. May include `symbol` itself.
    async fn peers(&self, symbol: &str) -> Result<Vec<String>>;

    async fn executives(&self, symbol: &str) -> Result<Vec<StockExecutive>>;

    /// Company news published between `from` and `to` (inclusive).
    async fn company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawNewsArticle>>;

    /// General market news feed.
    async fn general_news(&self) -> Result<Vec<RawNewsArticle>>;

    /// Free-text symbol search.
    async fn search(&self, query: &str) -> Result<Vec<SymbolSearchHit>>;
}
