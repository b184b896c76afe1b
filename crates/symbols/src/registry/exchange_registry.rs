//! JSON-driven exchange registry.
//!
//! Loads `exchanges.json` at compile time via `include_str!` and builds the
//! lookup indexes once via `lazy_static`. The registry is never mutated after
//! construction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::exchange_code::ExchangeCode;

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ExchangeCatalog {
    exchanges: Vec<ExchangeEntry>,
}

/// Whether a venue lists equities or crypto pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeKind {
    Equity,
    Crypto,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExchangeEntry {
    pub code: ExchangeCode,
    pub name: String,
    #[serde(default)]
    pub long_name: Option<String>,
    /// ISO 10383 market identifier; crypto venues have none.
    #[serde(default)]
    pub mic: Option<String>,
    pub currency: String,
    pub kind: ExchangeKind,
    /// Yahoo-style suffix appended to the base symbol for the market-data API.
    #[serde(default)]
    pub api_suffix: Option<String>,
}

// ── Registry with pre-built indexes ──────────────────────────────────────────

pub(crate) struct ExchangeRegistry {
    entries: Vec<ExchangeEntry>,
    by_code: HashMap<ExchangeCode, usize>,
    /// Suffix → exchange, in catalog order. Order is the parsing precedence.
    suffix_table: Vec<(String, ExchangeCode)>,
}

lazy_static! {
    pub(crate) static ref REGISTRY: ExchangeRegistry = ExchangeRegistry::load();
}

impl ExchangeRegistry {
    fn load() -> Self {
        let json = include_str!("exchanges.json");
        let catalog: ExchangeCatalog =
            serde_json::from_str(json).expect("exchanges.json must be valid");

        let mut by_code = HashMap::new();
        let mut suffix_table = Vec::new();

        for (index, entry) in catalog.exchanges.iter().enumerate() {
            // First entry wins for duplicated codes
            by_code.entry(entry.code).or_insert(index);

            if let Some(ref suffix) = entry.api_suffix {
                if !suffix.is_empty() {
                    suffix_table.push((suffix.to_uppercase(), entry.code));
                }
            }
        }

        ExchangeRegistry {
            entries: catalog.exchanges,
            by_code,
            suffix_table,
        }
    }

    fn entry(&self, code: ExchangeCode) -> Option<&ExchangeEntry> {
        self.by_code.get(&code).map(|&index| &self.entries[index])
    }
}

/// Full registry entry for an exchange.
pub fn exchange_entry(code: ExchangeCode) -> Option<&'static ExchangeEntry> {
    REGISTRY.entry(code)
}

/// All registered exchanges in catalog order.
pub fn exchange_list() -> &'static [ExchangeEntry] {
    &REGISTRY.entries
}

/// API suffix registered for an exchange (e.g. ".NS" for NSE).
///
/// US venues and crypto venues have no suffix.
pub fn api_suffix(code: ExchangeCode) -> Option<&'static str> {
    REGISTRY.entry(code)?.api_suffix.as_deref()
}

/// Ordered suffix → exchange table used by the suffix-qualified rule.
pub fn suffix_table() -> &'static [(String, ExchangeCode)] {
    &REGISTRY.suffix_table
}

/// Market identifier code for an exchange.
pub fn exchange_mic(code: ExchangeCode) -> Option<&'static str> {
    REGISTRY.entry(code)?.mic.as_deref()
}

/// Trading currency for an exchange.
pub fn exchange_currency(code: ExchangeCode) -> Option<&'static str> {
    REGISTRY.entry(code).map(|entry| entry.currency.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_registered() {
        for code in ExchangeCode::ALL {
            assert!(exchange_entry(code).is_some(), "missing entry for {}", code);
        }
        assert_eq!(exchange_list().len(), ExchangeCode::ALL.len());
    }

    #[test]
    fn test_suffix_table_order() {
        let table: Vec<(&str, ExchangeCode)> = suffix_table()
            .iter()
            .map(|(suffix, code)| (suffix.as_str(), *code))
            .collect();

        assert_eq!(
            table,
            vec![
                (".NS", ExchangeCode::Nse),
                (".BO", ExchangeCode::Bse),
                (".TO", ExchangeCode::Tsx),
                (".L", ExchangeCode::Lse),
                (".SI", ExchangeCode::Sgx),
            ]
        );
    }

    #[test]
    fn test_api_suffix() {
        assert_eq!(api_suffix(ExchangeCode::Nse), Some(".NS"));
        assert_eq!(api_suffix(ExchangeCode::Lse), Some(".L"));
        assert_eq!(api_suffix(ExchangeCode::Nasdaq), None);
        assert_eq!(api_suffix(ExchangeCode::Hkex), None);
        assert_eq!(api_suffix(ExchangeCode::Binance), None);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(exchange_mic(ExchangeCode::Tsx), Some("XTSE"));
        assert_eq!(exchange_mic(ExchangeCode::Binance), None);
        assert_eq!(exchange_currency(ExchangeCode::Nse), Some("INR"));
        assert_eq!(
            exchange_entry(ExchangeCode::Binance).map(|e| e.kind),
            Some(ExchangeKind::Crypto)
        );
    }
}
