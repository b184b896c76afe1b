//! Error types for the symbols crate.
//!
//! Normalization itself never fails; these errors only surface from the
//! strict parsing helpers (e.g. `ExchangeCode::from_str`).

use thiserror::Error;

/// Errors raised by strict symbol parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The exchange code is not part of the supported set.
    #[error("Unknown exchange code: {0}")]
    UnknownExchange(String),

    /// A widget symbol did not have the `EXCHANGE:BASE` shape.
    #[error("Malformed exchange-qualified symbol: {0}")]
    MalformedQualifiedSymbol(String),
}
