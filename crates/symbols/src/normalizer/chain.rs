//! Normalizer chain - tries the parsing rules in precedence order.

use super::model::{FallbackReason, NormalizationOptions, NormalizedSymbol};
use super::rules::{
    BareTickerRule, CryptoPairRule, EmptyRule, ExchangeQualifiedRule, RuleInput, SuffixRule,
    SymbolRule,
};

/// Ordered chain of [`SymbolRule`]s.
///
/// The default order is:
/// 1. Empty input
/// 2. Exchange-qualified (`NSE:TCS`)
/// 3. Suffix-qualified (`TCS.NS`)
/// 4. Crypto pair (`BTC-USD`)
/// 5. Bare ticker (always last)
///
/// The first rule returning a record wins. The normalizer holds no mutable
/// state, so one instance can be shared freely across threads.
pub struct SymbolNormalizer {
    rules: Vec<Box<dyn SymbolRule>>,
    terminal_rule: BareTickerRule,
}

impl SymbolNormalizer {
    /// Create a normalizer with the default rule order.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(EmptyRule),
                Box::new(ExchangeQualifiedRule),
                Box::new(SuffixRule),
                Box::new(CryptoPairRule),
            ],
            terminal_rule: BareTickerRule,
        }
    }

    /// Add a custom rule to the chain.
    ///
    /// The rule is added before the bare-ticker rule (which is always last).
    pub fn add_rule(&mut self, rule: Box<dyn SymbolRule>) {
        self.rules.push(rule);
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.name())
            .chain(std::iter::once(self.terminal_rule.name()))
            .collect()
    }

    /// Normalize a ticker. Never fails; malformed input yields a fallback record.
    pub fn normalize(&self, symbol: &str, options: &NormalizationOptions) -> NormalizedSymbol {
        let canonical = symbol.trim().to_uppercase();
        let input = RuleInput {
            input: symbol,
            canonical: &canonical,
            options,
        };

        for rule in &self.rules {
            if let Some(result) = rule.apply(&input) {
                return result;
            }
        }

        self.terminal_rule.apply(&input).unwrap_or_else(|| {
            NormalizedSymbol::fallback(symbol, options, FallbackReason::InvalidSymbol)
        })
    }
}

impl Default for SymbolNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExchangeCode;

    struct IndexRule;

    impl SymbolRule for IndexRule {
        fn name(&self) -> &'static str {
            "index"
        }

        fn apply(&self, input: &RuleInput<'_>) -> Option<NormalizedSymbol> {
            let base = input.canonical.strip_prefix('^')?;
            Some(NormalizedSymbol::new(
                input.input,
                ExchangeCode::Nyse,
                base.to_string(),
                false,
                None,
            ))
        }
    }

    #[test]
    fn test_default_rule_order() {
        let normalizer = SymbolNormalizer::new();
        assert_eq!(
            normalizer.rule_names(),
            vec![
                "empty",
                "exchange_qualified",
                "suffix",
                "crypto_pair",
                "bare_ticker"
            ]
        );
    }

    #[test]
    fn test_custom_rule_runs_before_bare_ticker() {
        let mut normalizer = SymbolNormalizer::new();
        normalizer.add_rule(Box::new(IndexRule));

        let symbol = normalizer.normalize("^NYA", &NormalizationOptions::default());
        assert_eq!(symbol.trading_view_symbol(), "NYSE:NYA");
        assert_eq!(normalizer.rule_names().last(), Some(&"bare_ticker"));
    }

    #[test]
    fn test_qualified_rule_precedes_suffix_rule() {
        let normalizer = SymbolNormalizer::new();
        let symbol = normalizer.normalize("NYSE:TCS.NS", &NormalizationOptions::default());

        assert_eq!(symbol.exchange(), ExchangeCode::Nyse);
        assert_eq!(symbol.base_symbol(), "TCSNS");
    }

    #[test]
    fn test_suffix_precedes_crypto() {
        let normalizer = SymbolNormalizer::new();
        let symbol = normalizer.normalize("BTC-USD.L", &NormalizationOptions::default());

        assert_eq!(symbol.exchange(), ExchangeCode::Lse);
        assert_eq!(symbol.base_symbol(), "BTCUSD");
    }
}
