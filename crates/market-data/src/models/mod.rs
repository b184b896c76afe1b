//! Wire and display models for the market data crate.

mod details;
mod news;
mod profile;
mod quote;
mod search;

pub use details::{PeerStockPerformance, StockDetailPayload, WatchlistQuoteSnapshot};
pub use news::{MarketNewsArticle, RawNewsArticle};
pub(crate) use profile::ExecutivesResponse;
pub use profile::{BasicFinancials, CompanyProfile, StockExecutive};
pub use quote::{CandleSeries, StockQuote};
pub use search::{StockSearchResult, SymbolSearchHit};
