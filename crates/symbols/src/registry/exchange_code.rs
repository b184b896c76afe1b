use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SymbolError;

/// Listing venues understood by the normalizer.
///
/// The set is closed: anything else degrades to the configured default
/// equity exchange during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeCode {
    Nse,
    Bse,
    Nasdaq,
    Nyse,
    Amex,
    Tsx,
    Lse,
    Sgx,
    Hkex,
    Binance,
}

impl ExchangeCode {
    pub const ALL: [ExchangeCode; 10] = [
        ExchangeCode::Nse,
        ExchangeCode::Bse,
        ExchangeCode::Nasdaq,
        ExchangeCode::Nyse,
        ExchangeCode::Amex,
        ExchangeCode::Tsx,
        ExchangeCode::Lse,
        ExchangeCode::Sgx,
        ExchangeCode::Hkex,
        ExchangeCode::Binance,
    ];

    /// The upper-case code used in widget symbols (e.g. "NSE").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
            Self::Nasdaq => "NASDAQ",
            Self::Nyse => "NYSE",
            Self::Amex => "AMEX",
            Self::Tsx => "TSX",
            Self::Lse => "LSE",
            Self::Sgx => "SGX",
            Self::Hkex => "HKEX",
            Self::Binance => "BINANCE",
        }
    }
}

impl fmt::Display for ExchangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeCode {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|exchange| exchange.as_str() == code)
            .ok_or(SymbolError::UnknownExchange(code))
    }
}
