//! Ticker symbol normalization.
//!
//! Maps the ticker spellings found across the application onto a single
//! [`NormalizedSymbol`] carrying both the market-data API form and the
//! charting-widget form.
//!
//! # Accepted conventions
//!
//! | Input | API symbol | Widget symbol |
//! |-------|-----------|---------------|
//! | `TCS.NS` | `TCS.NS` | `NSE:TCS` |
//! | `NSE:TCS` | `TCS.NS` | `NSE:TCS` |
//! | `BTC-USD`, `BTC/USDT` | `BTCUSDT` | `BINANCE:BTCUSDT` |
//! | `aapl` | `AAPL` | `NASDAQ:AAPL` |
//! | `""`, `...` | `AAPL` | `NASDAQ:AAPL` (fallback) |
//!
//! Normalization is total: malformed input produces a fallback record with
//! [`NormalizedSymbol::used_fallback`] set instead of an error.
//!
//! # Example
//!
//! ```
//! use stockwatch_symbols::{normalize_symbol, ExchangeCode, NormalizationOptions};
//!
//! let symbol = normalize_symbol("tcs.ns", &NormalizationOptions::default());
//! assert_eq!(symbol.exchange(), ExchangeCode::Nse);
//! assert_eq!(symbol.api_symbol(), "TCS.NS");
//! assert_eq!(symbol.trading_view_symbol(), "NSE:TCS");
//! ```

mod chain;
mod model;
mod rules;
mod sanitize;

use lazy_static::lazy_static;

pub use chain::SymbolNormalizer;
pub use model::{
    FallbackReason, NormalizationOptions, NormalizedSymbol, DEFAULT_EQUITY_EXCHANGE,
    FALLBACK_API_SYMBOL, FALLBACK_TRADING_VIEW_SYMBOL,
};
pub use rules::{
    BareTickerRule, CryptoPairRule, EmptyRule, ExchangeQualifiedRule, RuleInput, SuffixRule,
    SymbolRule, CRYPTO_EXCHANGE, CRYPTO_QUOTE_ASSET,
};
pub use sanitize::{parse_trading_view_symbol, sanitize_base};

lazy_static! {
    static ref DEFAULT_NORMALIZER: SymbolNormalizer = SymbolNormalizer::new();
}

/// Normalize any incoming ticker into its dual-format record.
pub fn normalize_symbol(symbol: &str, options: &NormalizationOptions) -> NormalizedSymbol {
    DEFAULT_NORMALIZER.normalize(symbol, options)
}

/// Normalize a possibly-missing ticker; `None` is treated as empty input.
pub fn normalize_optional(
    symbol: Option<&str>,
    options: &NormalizationOptions,
) -> NormalizedSymbol {
    normalize_symbol(symbol.unwrap_or_default(), options)
}

/// Convert a ticker into its widget form (e.g. `TCS.NS` -> `NSE:TCS`).
pub fn normalize_to_trading_view(symbol: &str, options: &NormalizationOptions) -> String {
    normalize_symbol(symbol, options).into_trading_view_symbol()
}

/// Convert a ticker into its API/storage form (re-applies exchange suffixes).
pub fn normalize_to_api(symbol: &str, options: &NormalizationOptions) -> String {
    normalize_symbol(symbol, options).into_api_symbol()
}
