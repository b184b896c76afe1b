//! Watchlist domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a saved watchlist entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub user_id: String,
    /// Normalized API symbol, e.g. "AAPL" or "TCS.NS"
    pub symbol: String,
    pub company: String,
    pub added_at: DateTime<Utc>,
}

/// Input model for adding a symbol to a user's watchlist
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistItem {
    pub user_id: String,
    pub symbol: String,
    pub company: String,
}

/// The signed-in user, as reported by the session provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_camel_case() {
        let item = WatchlistItem {
            id: "1".to_string(),
            user_id: "user-1".to_string(),
            symbol: "TCS.NS".to_string(),
            company: "Tata Consultancy Services".to_string(),
            added_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert!(json.get("addedAt").is_some());
    }
}
