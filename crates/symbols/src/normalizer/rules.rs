//! Parsing rules, one per accepted input convention.
//!
//! Each rule either claims the input and returns a record, or returns `None`
//! so the chain moves on to the next rule. A rule that recognizes its
//! convention but cannot build a usable base may also return `None` to fall
//! through (the suffix rule does this).

use lazy_static::lazy_static;
use regex::Regex;

use crate::registry::{suffix_table, ExchangeCode};

use super::model::{FallbackReason, NormalizationOptions, NormalizedSymbol};
use super::sanitize::sanitize_base;

lazy_static! {
    static ref CRYPTO_PAIR: Regex =
        Regex::new(r"^([A-Z0-9]+)[-/](USD|USDT)$").expect("crypto pair pattern must compile");
}

/// Quote asset every crypto pair is expressed in.
pub const CRYPTO_QUOTE_ASSET: &str = "USDT";
/// Venue used for crypto pairs.
pub const CRYPTO_EXCHANGE: ExchangeCode = ExchangeCode::Binance;

/// Input handed to every rule of the chain.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// The argument exactly as the caller passed it.
    pub input: &'a str,
    /// Trimmed, upper-cased input.
    pub canonical: &'a str,
    pub options: &'a NormalizationOptions,
}

/// Individual rule in the normalization chain.
pub trait SymbolRule: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempt to normalize the input.
    ///
    /// # Returns
    /// * `Some(record)` - The rule handled the input (possibly as a fallback)
    /// * `None` - This rule does not apply; try the next one
    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol>;
}

/// Empty input falls back immediately.
pub struct EmptyRule;

impl SymbolRule for EmptyRule {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
        if !input.canonical.is_empty() {
            return None;
        }

        Some(NormalizedSymbol::fallback(
            input.input,
            input.options,
            FallbackReason::EmptySymbol,
        ))
    }
}

/// `EXCHANGE:BASE`, the widget's own notation.
///
/// Unknown or missing exchange codes degrade to the default equity exchange.
pub struct ExchangeQualifiedRule;

impl SymbolRule for ExchangeQualifiedRule {
    fn name(&self) -> &'static str {
        "exchange_qualified"
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
        let (exchange_raw, rest) = input.canonical.split_once(':')?;

        // Anything after a second colon is ignored
        let base_raw = rest.split(':').next().unwrap_or_default();

        let exchange = exchange_raw
            .parse::<ExchangeCode>()
            .unwrap_or_else(|_| input.options.default_exchange());

        match sanitize_base(base_raw) {
            Some(base) => Some(NormalizedSymbol::new(
                input.input,
                exchange,
                base,
                false,
                None,
            )),
            None => Some(NormalizedSymbol::fallback(
                input.input,
                input.options,
                FallbackReason::InvalidQualifiedBase,
            )),
        }
    }
}

/// Yahoo-style regional suffixes (`TCS.NS`, `SHOP.TO`, `VOD.L`).
pub struct SuffixRule;

impl SymbolRule for SuffixRule {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
        for (suffix, exchange) in suffix_table() {
            if let Some(base_raw) = input.canonical.strip_suffix(suffix.as_str()) {
                // First matching suffix decides; an empty remainder falls through
                let base = sanitize_base(base_raw)?;
                return Some(NormalizedSymbol::new(
                    input.input,
                    *exchange,
                    base,
                    false,
                    None,
                ));
            }
        }

        None
    }
}

/// Crypto pairs quoted in USD or USDT (`BTC-USD`, `ETH/USDT`).
pub struct CryptoPairRule;

impl SymbolRule for CryptoPairRule {
    fn name(&self) -> &'static str {
        "crypto_pair"
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
        let captures = CRYPTO_PAIR.captures(input.canonical)?;
        let base = sanitize_base(captures.get(1)?.as_str())?;

        Some(NormalizedSymbol::new(
            input.input,
            CRYPTO_EXCHANGE,
            format!("{}{}", base, CRYPTO_QUOTE_ASSET),
            false,
            None,
        ))
    }
}

/// Terminal rule: treat whatever is left as a ticker on the default exchange.
pub struct BareTickerRule;

impl SymbolRule for BareTickerRule {
    fn name(&self) -> &'static str {
        "bare_ticker"
    }

    fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
        let Some(base) = sanitize_base(input.canonical) else {
            return Some(NormalizedSymbol::fallback(
                input.input,
                input.options,
                FallbackReason::InvalidSymbol,
            ));
        };

        let stripped = input.canonical != base;
        let reason = stripped.then_some(FallbackReason::StrippedCharacters);

        Some(NormalizedSymbol::new(
            input.input,
            input.options.default_exchange(),
            base,
            stripped,
            reason,
        ))
    }
}
