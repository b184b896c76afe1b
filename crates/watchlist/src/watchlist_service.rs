use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use stockwatch_symbols::{normalize_symbol, NormalizationOptions, NormalizedSymbol};

use crate::errors::{Result, WatchlistError};
use crate::watchlist_model::{CurrentUser, NewWatchlistItem, WatchlistItem};
use crate::watchlist_traits::{SessionProvider, WatchlistRepositoryTrait, WatchlistServiceTrait};

/// Watchlist operations for the signed-in user.
///
/// Symbols are stored in their normalized API spelling, so `"tcs.ns"`,
/// `"NSE:TCS"` and `"TCS.NS"` all address the same entry.
#[derive(Clone)]
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    session: Arc<dyn SessionProvider>,
    options: NormalizationOptions,
}

impl WatchlistService {
    pub fn new(
        repository: Arc<dyn WatchlistRepositoryTrait>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            repository,
            session,
            options: NormalizationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = options;
        self
    }

    async fn require_user(&self) -> Result<CurrentUser> {
        self.session
            .current_user()
            .await
            .ok_or(WatchlistError::Unauthorized)
    }

    /// Normalize for storage. Substituting the fallback ticker would store the
    /// wrong company, so those inputs are refused.
    fn storage_symbol(&self, symbol: &str) -> Result<NormalizedSymbol> {
        let normalized = normalize_symbol(symbol, &self.options);
        match normalized.reason() {
            Some(reason) if reason.is_substitution() => Err(WatchlistError::InvalidSymbol {
                input: symbol.to_string(),
                reason: reason.to_string(),
            }),
            Some(reason) => {
                log::warn!(
                    "Watchlist symbol {:?} stored as {} ({})",
                    symbol,
                    normalized.api_symbol(),
                    reason
                );
                Ok(normalized)
            }
            None => Ok(normalized),
        }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn add(&self, symbol: &str, company: &str) -> Result<WatchlistItem> {
        let user = self.require_user().await?;
        let normalized = self.storage_symbol(symbol)?;
        let symbol = normalized.into_api_symbol();

        let company = match company.trim() {
            "" => symbol.clone(),
            name => name.to_string(),
        };

        let item = self
            .repository
            .upsert(NewWatchlistItem {
                user_id: user.id,
                symbol,
                company,
            })
            .await?;
        log::info!("Added {} to watchlist", item.symbol);
        Ok(item)
    }

    async fn remove(&self, symbol: &str) -> Result<usize> {
        let user = self.require_user().await?;
        let normalized = self.storage_symbol(symbol)?;
        let removed = self
            .repository
            .delete(&user.id, normalized.api_symbol())
            .await?;
        log::debug!(
            "Removed {} from watchlist ({} rows)",
            normalized.api_symbol(),
            removed
        );
        Ok(removed)
    }

    async fn remove_many(&self, symbols: &[String]) -> Result<usize> {
        let user = self.require_user().await?;

        let mut seen = HashSet::new();
        let targets: Vec<String> = symbols
            .iter()
            .filter(|symbol| !symbol.trim().is_empty())
            .filter_map(|symbol| match self.storage_symbol(symbol) {
                Ok(normalized) => Some(normalized.into_api_symbol()),
                Err(e) => {
                    log::warn!("Skipping watchlist removal: {}", e);
                    None
                }
            })
            .filter(|symbol| seen.insert(symbol.clone()))
            .collect();

        if targets.is_empty() {
            return Ok(0);
        }
        self.repository.delete_many(&user.id, &targets).await
    }

    async fn clear(&self) -> Result<usize> {
        let user = self.require_user().await?;
        let removed = self.repository.delete_all(&user.id).await?;
        log::info!("Cleared watchlist ({} entries)", removed);
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<WatchlistItem>> {
        let user = self.require_user().await?;
        self.repository.list_for_user(&user.id).await
    }

    async fn symbols(&self) -> Result<Vec<String>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|item| item.symbol)
            .collect())
    }

    async fn is_in_watchlist(&self, symbol: &str) -> Result<bool> {
        let Some(user) = self.session.current_user().await else {
            return Ok(false);
        };
        match self.storage_symbol(symbol) {
            Ok(normalized) => {
                self.repository
                    .exists(&user.id, normalized.api_symbol())
                    .await
            }
            Err(_) => Ok(false),
        }
    }
}
