//! Stockwatch Market Data Crate
//!
//! Quotes, company profiles, fundamentals, peers and news for the stock
//! detail page, the news feed, the watchlist table and symbol search.
//!
//! # Architecture
//!
//! ```text
//!   user input ("NSE:TCS", "tcs.ns", "aapl")
//!                     |
//!                     v
//!          +---------------------+
//!          | StockDetailService  |  normalizes, fans out, degrades
//!          +---------------------+
//!                     |  api symbol ("TCS.NS")
//!                     v
//!          +---------------------+
//!          | StockDataProvider   |  (Finnhub)
//!          +---------------------+
//! ```
//!
//! Providers only ever see normalized API symbols. An input the normalizer
//! cannot recognize is reported as [`MarketDataError::SymbolNotRecognized`]
//! rather than answered with the fallback ticker's data.

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use config::MarketDataConfig;
pub use errors::{MarketDataError, Result, RetryClass};

pub use models::{
    BasicFinancials, CandleSeries, CompanyProfile, MarketNewsArticle, PeerStockPerformance,
    RawNewsArticle, StockDetailPayload, StockExecutive, StockQuote, StockSearchResult,
    SymbolSearchHit, WatchlistQuoteSnapshot,
};

pub use provider::finnhub::FinnhubProvider;
pub use provider::StockDataProvider;

pub use service::{StockDetailService, POPULAR_STOCK_SYMBOLS};
