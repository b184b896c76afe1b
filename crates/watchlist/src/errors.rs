//! Error types for watchlist operations.

use thiserror::Error;

/// Type alias for Result using [`WatchlistError`].
pub type Result<T> = std::result::Result<T, WatchlistError>;

#[derive(Error, Debug)]
pub enum WatchlistError {
    /// No signed-in user for an operation that needs one.
    #[error("Unauthorized")]
    Unauthorized,

    /// The ticker could not be normalized without substituting the fallback.
    #[error("Invalid symbol {input:?}: {reason}")]
    InvalidSymbol { input: String, reason: String },

    #[error("Repository error: {0}")]
    Repository(String),
}
