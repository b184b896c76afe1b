//! Supported exchanges and their static lookup tables.

mod exchange_code;
mod exchange_registry;

pub use exchange_code::ExchangeCode;
pub use exchange_registry::{
    api_suffix, exchange_currency, exchange_entry, exchange_list, exchange_mic, suffix_table,
    ExchangeEntry, ExchangeKind,
};
