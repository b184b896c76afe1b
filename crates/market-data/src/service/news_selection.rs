//! Article selection for the news feed.

use std::collections::{HashSet, VecDeque};

use crate::models::{MarketNewsArticle, RawNewsArticle};

/// Articles shown per feed.
pub const MAX_ARTICLES: usize = 6;

/// Pick up to [`MAX_ARTICLES`] valid articles, one per symbol per round, so a
/// single busy ticker cannot crowd out the others. Newest first.
pub fn round_robin(per_symbol: Vec<(String, Vec<RawNewsArticle>)>) -> Vec<MarketNewsArticle> {
    let mut queues: Vec<(String, VecDeque<RawNewsArticle>)> = per_symbol
        .into_iter()
        .map(|(symbol, articles)| {
            let valid = articles.into_iter().filter(RawNewsArticle::is_valid).collect();
            (symbol, valid)
        })
        .collect();

    let mut collected = Vec::with_capacity(MAX_ARTICLES);
    'rounds: for round in 0..MAX_ARTICLES {
        for (symbol, queue) in queues.iter_mut() {
            let Some(article) = queue.pop_front() else {
                continue;
            };
            collected.push(MarketNewsArticle::company(article, symbol, round));
            if collected.len() >= MAX_ARTICLES {
                break 'rounds;
            }
        }
    }

    collected.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    collected
}

/// Valid, deduplicated articles from the general feed, in feed order.
pub fn select_general(articles: Vec<RawNewsArticle>) -> Vec<MarketNewsArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(RawNewsArticle::is_valid)
        .filter(|article| seen.insert(article.dedupe_key()))
        .take(MAX_ARTICLES)
        .enumerate()
        .map(|(index, article)| MarketNewsArticle::market(article, index))
        .collect()
}
