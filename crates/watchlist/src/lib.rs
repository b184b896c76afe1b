//! Stockwatch Watchlist Crate
//!
//! Per-user watchlist storage. Every symbol is normalized with
//! `stockwatch_symbols` before it is stored or looked up, so equivalent
//! spellings (`"tcs.ns"`, `"NSE:TCS"`) address the same entry and stored
//! symbols can be passed straight to the market-data provider.

pub mod errors;
mod in_memory_repository;
mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;


pub use errors::{Result, WatchlistError};
pub use in_memory_repository::InMemoryWatchlistRepository;
pub use watchlist_model::{CurrentUser, NewWatchlistItem, WatchlistItem};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{SessionProvider, WatchlistRepositoryTrait, WatchlistServiceTrait};
