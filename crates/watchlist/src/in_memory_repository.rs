use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{Result, WatchlistError};
use crate::watchlist_model::{NewWatchlistItem, WatchlistItem};
use crate::watchlist_traits::WatchlistRepositoryTrait;

type Key = (String, String);

#[derive(Default)]
struct Store {
    items: HashMap<Key, (u64, WatchlistItem)>,
    next_seq: u64,
}

/// Process-local watchlist storage.
///
/// Entries carry an insertion sequence so that listing stays newest-first
/// even when two entries share a timestamp.
#[derive(Default)]
pub struct InMemoryWatchlistRepository {
    store: RwLock<Store>,
}

impl InMemoryWatchlistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|e| WatchlistError::Repository(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|e| WatchlistError::Repository(e.to_string()))
    }
}

fn key(user_id: &str, symbol: &str) -> Key {
    (user_id.to_string(), symbol.to_string())
}

#[async_trait]
impl WatchlistRepositoryTrait for InMemoryWatchlistRepository {
    async fn upsert(&self, item: NewWatchlistItem) -> Result<WatchlistItem> {
        let mut store = self.write()?;
        let key = key(&item.user_id, &item.symbol);

        if let Some((_, existing)) = store.items.get_mut(&key) {
            existing.company = item.company;
            return Ok(existing.clone());
        }

        let seq = store.next_seq;
        store.next_seq += 1;
        let created = WatchlistItem {
            id: Uuid::now_v7().to_string(),
            user_id: item.user_id,
            symbol: item.symbol,
            company: item.company,
            added_at: Utc::now(),
        };
        store.items.insert(key, (seq, created.clone()));
        Ok(created)
    }

    async fn delete(&self, user_id: &str, symbol: &str) -> Result<usize> {
        let mut store = self.write()?;
        Ok(usize::from(store.items.remove(&key(user_id, symbol)).is_some()))
    }

    async fn delete_many(&self, user_id: &str, symbols: &[String]) -> Result<usize> {
        let mut store = self.write()?;
        Ok(symbols
            .iter()
            .filter(|symbol| store.items.remove(&key(user_id, symbol)).is_some())
            .count())
    }

    async fn delete_all(&self, user_id: &str) -> Result<usize> {
        let mut store = self.write()?;
        let before = store.items.len();
        store.items.retain(|(owner, _), _| owner != user_id);
        Ok(before - store.items.len())
    }

    async fn exists(&self, user_id: &str, symbol: &str) -> Result<bool> {
        Ok(self.read()?.items.contains_key(&key(user_id, symbol)))
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>> {
        let store = self.read()?;
        let mut entries: Vec<&(u64, WatchlistItem)> = store
            .items
            .iter()
            .filter(|((owner, _), _)| owner == user_id)
            .map(|(_, entry)| entry)
            .collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.added_at.cmp(&a.added_at).then(seq_b.cmp(seq_a))
        });
        Ok(entries.into_iter().map(|(_, item)| item.clone()).collect())
    }
}
