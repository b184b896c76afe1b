use crate::errors::Result;
use crate::watchlist_model::{CurrentUser, NewWatchlistItem, WatchlistItem};
use async_trait::async_trait;

/// Trait for watchlist repository operations.
///
/// Entries are unique on `(user_id, symbol)`. Symbols reaching the
/// repository are already normalized.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    /// Insert, or update the company of an existing entry. The original id
    /// and `added_at` are kept.
    async fn upsert(&self, item: NewWatchlistItem) -> Result<WatchlistItem>;
    async fn delete(&self, user_id: &str, symbol: &str) -> Result<usize>;
    async fn delete_many(&self, user_id: &str, symbols: &[String]) -> Result<usize>;
    async fn delete_all(&self, user_id: &str) -> Result<usize>;
    async fn exists(&self, user_id: &str, symbol: &str) -> Result<bool>;
    /// Newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>>;
}

/// Source of the signed-in user.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_user(&self) -> Option<CurrentUser>;
}

/// Trait for watchlist service operations
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    async fn add(&self, symbol: &str, company: &str) -> Result<WatchlistItem>;
    async fn remove(&self, symbol: &str) -> Result<usize>;
    async fn remove_many(&self, symbols: &[String]) -> Result<usize>;
    async fn clear(&self) -> Result<usize>;
    async fn list(&self) -> Result<Vec<WatchlistItem>>;
    async fn symbols(&self) -> Result<Vec<String>>;
    async fn is_in_watchlist(&self, symbol: &str) -> Result<bool>;
}
