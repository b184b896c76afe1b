//! Stockwatch Symbols Crate
//!
//! Ticker symbol normalization shared by every part of the application that
//! touches a ticker: watchlist storage, market-data lookups and chart
//! widget configuration.
//!
//! # Overview
//!
//! ```text
//!   "tcs.ns" / "NSE:TCS" / "BTC-USD" / "aapl"
//!                     |
//!                     v
//!          +---------------------+
//!          |  SymbolNormalizer   |  (ordered rule chain, total)
//!          +---------------------+
//!                     |
//!                     v
//!          +---------------------+
//!          |  NormalizedSymbol   |  api_symbol + trading_view_symbol
//!          +---------------------+
//!             |               |
//!             v               v
//!       market-data API   chart widget
//! ```
//!
//! # Core Types
//!
//! - [`NormalizedSymbol`] - Dual-format result of normalization
//! - [`NormalizationOptions`] - Default exchange and fallback overrides
//! - [`ExchangeCode`] - Supported listing venues
//! - [`SymbolNormalizer`] - The rule chain behind [`normalize_symbol`]
//! - [`WidgetConfig`] - Chart widget configuration

pub mod errors;
pub mod normalizer;
pub mod registry;
pub mod widget;

pub use errors::SymbolError;

pub use normalizer::{
    normalize_optional, normalize_symbol, normalize_to_api, normalize_to_trading_view,
    parse_trading_view_symbol, sanitize_base, FallbackReason, NormalizationOptions,
    NormalizedSymbol, SymbolNormalizer, SymbolRule, DEFAULT_EQUITY_EXCHANGE, FALLBACK_API_SYMBOL,
    FALLBACK_TRADING_VIEW_SYMBOL,
};

pub use registry::{
    api_suffix, exchange_currency, exchange_entry, exchange_list, exchange_mic, ExchangeCode,
    ExchangeEntry, ExchangeKind,
};

pub use widget::{
    prepare_widget_config, PreparedWidgetConfig, WidgetConfig, SYMBOL_FALLBACK_MESSAGE,
};
