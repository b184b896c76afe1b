//! Market-data configuration loaded from the environment.

use std::time::Duration;

use crate::errors::{MarketDataError, Result};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_VARS: [&str; 2] = ["FINNHUB_API_KEY", "NEXT_PUBLIC_FINNHUB_API_KEY"];
const BASE_URL_VAR: &str = "FINNHUB_BASE_URL";
const TIMEOUT_VAR: &str = "FINNHUB_TIMEOUT_SECS";

#[derive(Clone)]
pub struct MarketDataConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for MarketDataConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDataConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl MarketDataConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from `.env` (if present) and process environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|&key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or_else(|| MarketDataError::MissingApiKey {
                provider: "FINNHUB".to_string(),
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| MarketDataError::InvalidConfig {
                    key: TIMEOUT_VAR.to_string(),
                    value: value.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            base_url,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MarketDataConfig::from_lookup(lookup(&[("FINNHUB_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_public_key_fallback() {
        let config = MarketDataConfig::from_lookup(lookup(&[
            ("FINNHUB_API_KEY", "  "),
            ("NEXT_PUBLIC_FINNHUB_API_KEY", "public"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "public");
    }

    #[test]
    fn test_missing_key() {
        let result = MarketDataConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(MarketDataError::MissingApiKey { .. })));
    }

    #[test]
    fn test_overrides() {
        let config = MarketDataConfig::from_lookup(lookup(&[
            ("FINNHUB_API_KEY", "abc"),
            ("FINNHUB_BASE_URL", "http://localhost:9000/api/"),
            ("FINNHUB_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = MarketDataConfig::from_lookup(lookup(&[
            ("FINNHUB_API_KEY", "abc"),
            ("FINNHUB_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(MarketDataError::InvalidConfig { .. })));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = MarketDataConfig::new("secret-key");
        assert!(!format!("{:?}", config).contains("secret-key"));
    }
}
