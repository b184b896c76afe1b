//! Services that combine provider lookups into page-level payloads.

mod news_selection;
mod stock_detail_service;


pub use news_selection::MAX_ARTICLES;
pub use stock_detail_service::{StockDetailService, POPULAR_STOCK_SYMBOLS};
