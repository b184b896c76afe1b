use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use futures::future::join_all;
use stockwatch_symbols::{normalize_symbol, NormalizationOptions, NormalizedSymbol};
use tracing::{debug, error, warn};

use super::news_selection::{round_robin, select_general};
use crate::errors::{MarketDataError, Result, RetryClass};
use crate::models::{
    CompanyProfile, MarketNewsArticle, PeerStockPerformance, StockDetailPayload,
    StockSearchResult, WatchlistQuoteSnapshot,
};
use crate::provider::StockDataProvider;

/// Symbols listed in the search palette before the user types anything.
pub const POPULAR_STOCK_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "ORCL", "CRM", "ADBE",
    "INTC", "AMD", "PYPL", "UBER",
];

const POPULAR_SEARCH_COUNT: usize = 10;
const HISTORY_DAYS: i64 = 365 * 5;
const NEWS_WINDOW_DAYS: i64 = 5;
const MAX_PEERS: usize = 6;
const MAX_EXECUTIVES: usize = 6;
const MAX_SEARCH_RESULTS: usize = 15;

/// Assembles stock detail pages, news feeds, watchlist rows and search
/// results from a [`StockDataProvider`].
///
/// Every symbol is normalized to its API spelling before it reaches the
/// provider. Inputs the normalizer could only answer with the fallback
/// ticker are refused instead of silently showing the fallback's data.
#[derive(Clone)]
pub struct StockDetailService {
    provider: Arc<dyn StockDataProvider>,
    options: NormalizationOptions,
}

impl StockDetailService {
    pub fn new(provider: Arc<dyn StockDataProvider>) -> Self {
        Self {
            provider,
            options: NormalizationOptions::default(),
        }
    }

    /// Override the normalizer defaults (default exchange, fallback symbol).
    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = options;
        self
    }

    fn resolve(&self, symbol: &str) -> Result<NormalizedSymbol> {
        let normalized = normalize_symbol(symbol, &self.options);
        match normalized.reason() {
            Some(reason) if reason.is_substitution() => {
                return Err(MarketDataError::SymbolNotRecognized {
                    input: symbol.to_string(),
                    reason: reason.to_string(),
                });
            }
            Some(reason) => warn!(
                "Symbol {:?} normalized to {} ({})",
                symbol,
                normalized.api_symbol(),
                reason
            ),
            None => {}
        }
        Ok(normalized)
    }

    /// Normalize a batch of inputs, dropping blanks, unrecognized symbols and
    /// duplicates while keeping the first-seen order.
    fn resolve_all<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<NormalizedSymbol> {
        let mut seen = HashSet::new();
        symbols
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|symbol| !symbol.trim().is_empty())
            .filter_map(|symbol| match self.resolve(symbol) {
                Ok(normalized) => Some(normalized),
                Err(e) => {
                    debug!("Skipping symbol: {}", e);
                    None
                }
            })
            .filter(|normalized| seen.insert(normalized.api_symbol().to_string()))
            .collect()
    }

    /// Log a failed lookup that degrades to an empty value.
    fn degrade<T>(&self, operation: &str, symbol: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                match e.retry_class() {
                    RetryClass::WithBackoff => warn!(
                        "{} {} for {} failed, try again later: {}",
                        self.provider.id(),
                        operation,
                        symbol,
                        e
                    ),
                    RetryClass::Never => debug!(
                        "{} {} for {} unavailable: {}",
                        self.provider.id(),
                        operation,
                        symbol,
                        e
                    ),
                }
                None
            }
        }
    }

    /// Everything the stock detail page needs, fetched concurrently.
    ///
    /// Only an unrecognized symbol is an error. Each individual lookup that
    /// fails degrades to `None` or an empty list.
    pub async fn stock_details(&self, symbol: &str) -> Result<StockDetailPayload> {
        let normalized = self.resolve(symbol)?;
        let api_symbol = normalized.api_symbol();

        let now = Utc::now();
        let to = now.timestamp();
        let from = (now - Duration::days(HISTORY_DAYS)).timestamp();

        let news_symbols = [api_symbol];
        let provider = self.provider.as_ref();
        let (quote, profile, candles, metrics, peers, executives, news) = futures::join!(
            provider.quote(api_symbol),
            provider.profile(api_symbol),
            provider.candles(api_symbol, from, to),
            provider.metrics(api_symbol),
            provider.peers(api_symbol),
            provider.executives(api_symbol),
            self.news(&news_symbols),
        );

        let peer_symbols: Vec<String> = self
            .degrade("peers", api_symbol, peers)
            .unwrap_or_default()
            .into_iter()
            .filter(|peer| !peer.is_empty() && peer != api_symbol)
            .take(MAX_PEERS)
            .collect();
        let peers = join_all(peer_symbols.iter().map(|peer| self.peer_performance(peer))).await;

        let mut executives = self
            .degrade("executives", api_symbol, executives)
            .unwrap_or_default();
        executives.truncate(MAX_EXECUTIVES);

        Ok(StockDetailPayload {
            symbol: api_symbol.to_string(),
            trading_view_symbol: normalized.trading_view_symbol().to_string(),
            quote: self.degrade("quote", api_symbol, quote),
            profile: self.degrade("profile", api_symbol, profile),
            historical: self
                .degrade("candles", api_symbol, candles)
                .filter(|series| series.is_ok()),
            metrics: self
                .degrade("metrics", api_symbol, metrics)
                .unwrap_or_default(),
            news: self.degrade("news", api_symbol, news).unwrap_or_default(),
            peers,
            executives,
        })
    }

    async fn peer_performance(&self, peer: &str) -> PeerStockPerformance {
        let (quote, profile) =
            futures::join!(self.provider.quote(peer), self.provider.profile(peer));

        let Some(quote) = self.degrade("peer quote", peer, quote) else {
            return PeerStockPerformance::unavailable(peer);
        };
        let company_name = self
            .degrade("peer profile", peer, profile)
            .and_then(|profile| profile.name.filter(|name| !name.is_empty()))
            .unwrap_or_else(|| peer.to_string());

        PeerStockPerformance {
            symbol: peer.to_string(),
            company_name,
            current_price: quote.current_price(),
            change: quote.change(),
            change_percent: quote.change_percent(),
        }
    }

    /// Up to six recent articles for the given tickers, or general market
    /// news when none of them has any.
    ///
    /// Company news failures are tolerated per symbol. A failing general
    /// feed is returned as an error.
    pub async fn news<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<MarketNewsArticle>> {
        let resolved = self.resolve_all(symbols);

        if !resolved.is_empty() {
            let to = Utc::now().date_naive();
            let from = to - Duration::days(NEWS_WINDOW_DAYS);

            let fetched = join_all(resolved.iter().map(|normalized| async move {
                let symbol = normalized.api_symbol();
                let articles = self.provider.company_news(symbol, from, to).await;
                let articles = self
                    .degrade("company news", symbol, articles)
                    .unwrap_or_default();
                (symbol.to_string(), articles)
            }))
            .await;

            let collected = round_robin(fetched);
            if !collected.is_empty() {
                return Ok(collected);
            }
            debug!("No company news for {} symbols, using general news", resolved.len());
        }

        let general = self.provider.general_news().await.map_err(|e| {
            error!("Failed to fetch general news: {}", e);
            e
        })?;
        Ok(select_general(general))
    }

    /// Quote rows for the watchlist table, one per distinct symbol.
    ///
    /// A symbol whose lookups fail still gets a row, with zeroed prices.
    pub async fn watchlist_snapshots<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Vec<WatchlistQuoteSnapshot> {
        let resolved = self.resolve_all(symbols);
        join_all(
            resolved
                .iter()
                .map(|normalized| self.snapshot(normalized.api_symbol())),
        )
        .await
    }

    async fn snapshot(&self, symbol: &str) -> WatchlistQuoteSnapshot {
        let provider = self.provider.as_ref();
        let fetched = futures::try_join!(
            provider.quote(symbol),
            provider.profile(symbol),
            provider.metrics(symbol),
        );

        let Some((quote, profile, metrics)) = self.degrade("snapshot", symbol, fetched) else {
            return WatchlistQuoteSnapshot::zeroed(symbol);
        };

        WatchlistQuoteSnapshot {
            symbol: symbol.to_string(),
            price: quote.current_price(),
            change: quote.change(),
            change_percent: quote.change_percent(),
            high_52_week: metrics.number("52WeekHigh"),
            low_52_week: metrics.number("52WeekLow"),
            volume: metrics.number("10DayAverageTradingVolume"),
            market_cap: profile.market_capitalization.map(|cap| cap * 1_000_000.0),
            sector: profile.finnhub_industry,
        }
    }

    /// Symbol search for the command palette.
    ///
    /// A blank query lists popular symbols. Failures yield an empty list.
    pub async fn search(&self, query: &str) -> Vec<StockSearchResult> {
        let trimmed = query.trim();

        let mut results = if trimmed.is_empty() {
            self.popular_symbols().await
        } else {
            match self.provider.search(trimmed).await {
                Ok(hits) => hits
                    .into_iter()
                    .filter(|hit| !hit.symbol.trim().is_empty())
                    .map(|hit| {
                        StockSearchResult::new(
                            &hit.symbol,
                            Some(hit.description.as_str()),
                            None,
                            Some(hit.security_type.as_str()),
                        )
                    })
                    .collect(),
                Err(e) => {
                    error!("Error in stock search for {:?}: {}", trimmed, e);
                    Vec::new()
                }
            }
        };

        results.truncate(MAX_SEARCH_RESULTS);
        results
    }

    async fn popular_symbols(&self) -> Vec<StockSearchResult> {
        let top = &POPULAR_STOCK_SYMBOLS[..POPULAR_SEARCH_COUNT];
        let profiles = join_all(top.iter().map(|symbol| async move {
            let profile = self.provider.profile(symbol).await;
            (*symbol, self.degrade("profile", symbol, profile))
        }))
        .await;

        profiles
            .into_iter()
            .filter_map(|(symbol, profile)| {
                let profile: CompanyProfile = profile?;
                let name = profile.display_name()?;
                Some(StockSearchResult::new(
                    symbol,
                    Some(name),
                    profile.exchange.as_deref(),
                    Some("Common Stock"),
                ))
            })
            .collect()
    }
}
