//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`RetryClass`]: Classification for deciding whether a failure is worth retrying

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Type alias for Result using [`MarketDataError`].
pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No API key was configured for the provider.
    #[error("{provider} API key is not configured")]
    MissingApiKey {
        /// The provider missing a key
        provider: String,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// The caller's ticker could not be normalized; the fallback ticker
    /// would have been substituted.
    #[error("Symbol not recognized: {input:?} ({reason})")]
    SymbolNotRecognized { input: String, reason: String },

    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429 / 403 quota).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockwatch_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "FINNHUB".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::SymbolNotFound("INVALID".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Terminal errors - never retry
            Self::MissingApiKey { .. }
            | Self::InvalidConfig { .. }
            | Self::SymbolNotRecognized { .. }
            | Self::SymbolNotFound(_)
            | Self::ProviderError { .. } => RetryClass::Never,

            // Transient errors - retry with backoff
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => {
                RetryClass::WithBackoff
            }
        }
    }
}
