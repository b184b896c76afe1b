//! Market data provider abstraction and the Finnhub implementation.
//!
//! Providers receive normalized API symbols. Mapping user input to that form
//! is the job of `stockwatch_symbols`, applied by the services before any
//! provider call.

mod traits;

pub mod finnhub;

pub use traits::StockDataProvider;
