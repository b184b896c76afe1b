use crate::errors::SymbolError;
use crate::registry::ExchangeCode;

/// Reduce a ticker fragment to its upper-case `[A-Z0-9]` characters.
///
/// Returns `None` when nothing survives the filter. This is a character
/// filter only; it says nothing about whether the ticker exists.
pub fn sanitize_base(value: &str) -> Option<String> {
    let cleaned: String = value
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Strictly parse a widget symbol (`EXCHANGE:BASE`).
///
/// Unlike normalization this rejects unknown exchanges and empty bases.
pub fn parse_trading_view_symbol(value: &str) -> Result<(ExchangeCode, String), SymbolError> {
    let (exchange_raw, base_raw) = value
        .split_once(':')
        .ok_or_else(|| SymbolError::MalformedQualifiedSymbol(value.to_string()))?;

    let exchange = exchange_raw.parse::<ExchangeCode>()?;
    let base = sanitize_base(base_raw)
        .ok_or_else(|| SymbolError::MalformedQualifiedSymbol(value.to_string()))?;

    Ok((exchange, base))
}
