//! Charting widget configuration.
//!
//! Widget configs are free-form JSON objects handed to the embeddable chart
//! script. Only the `symbol` key is interpreted: it is rewritten into the
//! widget's `EXCHANGE:BASE` form before embedding.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalizer::{
    normalize_symbol, NormalizationOptions, NormalizedSymbol, FALLBACK_TRADING_VIEW_SYMBOL,
};

/// Logged whenever a widget symbol had to be replaced by a fallback.
pub const SYMBOL_FALLBACK_MESSAGE: &str =
    "Symbol normalization fallback triggered; verify the mapping rules.";

const SYMBOL_KEY: &str = "symbol";

/// JSON configuration object for an embedded chart widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetConfig(Map<String, Value>);

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from a JSON value; `None` if the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Set a key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The configured symbol, if it is a string.
    pub fn symbol(&self) -> Option<&str> {
        self.0.get(SYMBOL_KEY).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize the config for embedding into the widget script.
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

/// A widget config after symbol normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedWidgetConfig {
    pub config: WidgetConfig,
    /// Present when the config carried a non-empty symbol.
    pub normalized: Option<NormalizedSymbol>,
}

impl PreparedWidgetConfig {
    pub fn used_fallback(&self) -> bool {
        self.normalized
            .as_ref()
            .is_some_and(NormalizedSymbol::used_fallback)
    }
}

/// Rewrite the config's `symbol` into widget form.
///
/// Configs without a non-empty string symbol are returned unchanged. When
/// normalization falls back, a warning is logged and the fallback symbol is
/// still rendered.
pub fn prepare_widget_config(config: &WidgetConfig) -> PreparedWidgetConfig {
    let Some(symbol) = config.symbol().filter(|s| !s.is_empty()) else {
        return PreparedWidgetConfig {
            config: config.clone(),
            normalized: None,
        };
    };

    let options = NormalizationOptions::new().with_fallback(FALLBACK_TRADING_VIEW_SYMBOL);
    let normalized = normalize_symbol(symbol, &options);

    if normalized.used_fallback() {
        warn!(
            "{} input={:?} resolved={} reason={}",
            SYMBOL_FALLBACK_MESSAGE,
            normalized.input(),
            normalized.trading_view_symbol(),
            normalized.reason().map(|r| r.as_str()).unwrap_or("none")
        );
    }

    let config = config
        .clone()
        .with(SYMBOL_KEY, normalized.trading_view_symbol());

    PreparedWidgetConfig {
        config,
        normalized: Some(normalized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbol_is_rewritten() {
        let config = WidgetConfig::new()
            .with("symbol", "tcs.ns")
            .with("interval", "D")
            .with("height", 600);

        let prepared = prepare_widget_config(&config);

        assert_eq!(prepared.config.symbol(), Some("NSE:TCS"));
        assert_eq!(prepared.config.get("interval"), Some(&json!("D")));
        assert_eq!(prepared.config.get("height"), Some(&json!(600)));
        assert!(!prepared.used_fallback());
    }

    #[test]
    fn test_fallback_still_renders() {
        let config = WidgetConfig::new().with("symbol", "!!!");
        let prepared = prepare_widget_config(&config);

        assert!(prepared.used_fallback());
        assert_eq!(prepared.config.symbol(), Some(FALLBACK_TRADING_VIEW_SYMBOL));
    }

    #[test]
    fn test_config_without_symbol_is_unchanged() {
        let config = WidgetConfig::new().with("colorTheme", "dark");
        let prepared = prepare_widget_config(&config);
        assert_eq!(prepared.config, config);
        assert!(prepared.normalized.is_none());

        let config = WidgetConfig::new().with("symbol", "");
        assert_eq!(prepare_widget_config(&config).config, config);

        // Non-string symbols are left for the widget to reject
        let config = WidgetConfig::new().with("symbol", 42);
        assert_eq!(prepare_widget_config(&config).config, config);
    }

    #[test]
    fn test_from_value_and_script_json() {
        assert!(WidgetConfig::from_value(json!(["not", "an", "object"])).is_none());

        let config = WidgetConfig::from_value(json!({ "symbol": "BTC-USD" })).unwrap();
        let prepared = prepare_widget_config(&config);
        let script = prepared.config.to_script_json().unwrap();

        let parsed: Value = serde_json::from_str(&script).unwrap();
        assert_eq!(parsed, json!({ "symbol": "BINANCE:BTCUSDT" }));
    }
}
