//! Normalization output record and options.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::registry::{api_suffix, ExchangeCode};

use super::sanitize::{parse_trading_view_symbol, sanitize_base};

/// Exchange used for bare tickers when the caller does not pick one.
pub const DEFAULT_EQUITY_EXCHANGE: ExchangeCode = ExchangeCode::Nasdaq;
/// Ticker substituted when the input cannot be parsed.
pub const FALLBACK_API_SYMBOL: &str = "AAPL";
/// Widget symbol matching [`FALLBACK_API_SYMBOL`] on the default exchange.
pub const FALLBACK_TRADING_VIEW_SYMBOL: &str = "NASDAQ:AAPL";

/// Why a record was produced by a fallback or corrected path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// Input was empty after trimming.
    EmptySymbol,
    /// `EXCHANGE:BASE` input whose base had no alphanumeric characters.
    InvalidQualifiedBase,
    /// Input had no alphanumeric characters at all.
    InvalidSymbol,
    /// A bare ticker was accepted after dropping stray characters.
    StrippedCharacters,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptySymbol => "empty symbol",
            Self::InvalidQualifiedBase => "invalid base in exchange-qualified symbol",
            Self::InvalidSymbol => "invalid symbol",
            Self::StrippedCharacters => "stripped non-alphanumeric characters",
        }
    }

    /// True when the input was discarded and the fallback ticker substituted.
    pub fn is_substitution(&self) -> bool {
        !matches!(self, Self::StrippedCharacters)
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FallbackReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Caller overrides for the normalizer defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationOptions {
    /// `EXCHANGE:BASE` symbol substituted on fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_trading_view_symbol: Option<String>,
    /// Exchange assumed for bare tickers and unknown exchange prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_equity_exchange: Option<ExchangeCode>,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback widget symbol.
    pub fn with_fallback(mut self, symbol: impl Into<String>) -> Self {
        self.fallback_trading_view_symbol = Some(symbol.into());
        self
    }

    /// Set the default equity exchange.
    pub fn with_default_exchange(mut self, exchange: ExchangeCode) -> Self {
        self.default_equity_exchange = Some(exchange);
        self
    }

    pub fn default_exchange(&self) -> ExchangeCode {
        self.default_equity_exchange.unwrap_or(DEFAULT_EQUITY_EXCHANGE)
    }

    /// Exchange and base used when the input has to be replaced.
    ///
    /// An override that does not parse strictly is ignored.
    pub fn fallback_pair(&self) -> (ExchangeCode, String) {
        if let Some(ref symbol) = self.fallback_trading_view_symbol {
            if let Ok(pair) = parse_trading_view_symbol(symbol) {
                return pair;
            }
        }

        let base =
            sanitize_base(FALLBACK_API_SYMBOL).unwrap_or_else(|| FALLBACK_API_SYMBOL.to_string());
        (self.default_exchange(), base)
    }
}

/// A ticker resolved into both its API and widget spellings.
///
/// Both spellings are derived from the same `(exchange, base_symbol)` pair
/// at construction; the record is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSymbol {
    input: String,
    api_symbol: String,
    trading_view_symbol: String,
    exchange: ExchangeCode,
    base_symbol: String,
    used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<FallbackReason>,
}

impl NormalizedSymbol {
    pub(crate) fn new(
        input: &str,
        exchange: ExchangeCode,
        base_symbol: String,
        used_fallback: bool,
        reason: Option<FallbackReason>,
    ) -> Self {
        let api_symbol = match api_suffix(exchange) {
            Some(suffix) => format!("{}{}", base_symbol, suffix),
            None => base_symbol.clone(),
        };
        let trading_view_symbol = format!("{}:{}", exchange, base_symbol);

        Self {
            input: input.to_string(),
            api_symbol,
            trading_view_symbol,
            exchange,
            base_symbol,
            used_fallback,
            reason,
        }
    }

    /// Record built from the fallback pair of `options`.
    pub(crate) fn fallback(
        input: &str,
        options: &NormalizationOptions,
        reason: FallbackReason,
    ) -> Self {
        let (exchange, base) = options.fallback_pair();
        Self::new(input, exchange, base, true, Some(reason))
    }

    /// The raw argument, unmodified.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Symbol for the market-data API (e.g. "TCS.NS").
    pub fn api_symbol(&self) -> &str {
        &self.api_symbol
    }

    /// Symbol for the charting widget (e.g. "NSE:TCS").
    pub fn trading_view_symbol(&self) -> &str {
        &self.trading_view_symbol
    }

    pub fn exchange(&self) -> ExchangeCode {
        self.exchange
    }

    pub fn base_symbol(&self) -> &str {
        &self.base_symbol
    }

    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn reason(&self) -> Option<FallbackReason> {
        self.reason
    }

    /// True when the input was replaced by the fallback ticker.
    pub fn is_substituted(&self) -> bool {
        self.reason.is_some_and(|reason| reason.is_substitution())
    }

    /// Consume the record, keeping only the API spelling.
    pub fn into_api_symbol(self) -> String {
        self.api_symbol
    }

    /// Consume the record, keeping only the widget spelling.
    pub fn into_trading_view_symbol(self) -> String {
        self.trading_view_symbol
    }
}
