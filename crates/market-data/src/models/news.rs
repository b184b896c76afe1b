//! News article models.

use serde::{Deserialize, Serialize};

const COMPANY_SUMMARY_LIMIT: usize = 200;
const MARKET_SUMMARY_LIMIT: usize = 150;

/// Article as returned by `/company-news` and `/news`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNewsArticle {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Publication time (Unix seconds)
    #[serde(default)]
    pub datetime: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub related: Option<String>,
}

fn non_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl RawNewsArticle {
    /// An article is displayable when it has a headline, summary, url and a
    /// positive timestamp.
    pub fn is_valid(&self) -> bool {
        non_blank(&self.headline)
            && non_blank(&self.summary)
            && non_blank(&self.url)
            && self.datetime.is_some_and(|ts| ts > 0)
    }

    /// Key used to deduplicate the general news feed.
    pub fn dedupe_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.id.unwrap_or_default(),
            self.url.as_deref().unwrap_or_default(),
            self.headline.as_deref().unwrap_or_default()
        )
    }
}

/// Article shaped for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketNewsArticle {
    pub id: i64,
    pub headline: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub datetime: i64,
    pub image: String,
    pub category: String,
    pub related: String,
}

impl MarketNewsArticle {
    /// Article about a specific company, tagged with the ticker it was found for.
    pub fn company(article: RawNewsArticle, symbol: &str, index: usize) -> Self {
        Self::format(article, Some(symbol), index)
    }

    /// Article from the general market feed.
    pub fn market(article: RawNewsArticle, index: usize) -> Self {
        Self::format(article, None, index)
    }

    fn format(article: RawNewsArticle, symbol: Option<&str>, index: usize) -> Self {
        let limit = if symbol.is_some() {
            COMPANY_SUMMARY_LIMIT
        } else {
            MARKET_SUMMARY_LIMIT
        };
        let summary = truncate(article.summary.as_deref().unwrap_or_default().trim(), limit);
        let source = article
            .source
            .filter(|source| !source.trim().is_empty())
            .unwrap_or_else(|| {
                if symbol.is_some() {
                    "Company News".to_string()
                } else {
                    "Market News".to_string()
                }
            });
        let (category, related) = match symbol {
            Some(symbol) => ("company".to_string(), symbol.to_string()),
            None => (
                article.category.unwrap_or_else(|| "general".to_string()),
                article.related.unwrap_or_default(),
            ),
        };

        Self {
            id: article
                .id
                .unwrap_or_default()
                .saturating_add(index as i64),
            headline: article.headline.unwrap_or_default().trim().to_string(),
            summary,
            source,
            url: article.url.unwrap_or_default(),
            datetime: article.datetime.unwrap_or_default(),
            image: article.image.unwrap_or_default(),
            category,
            related,
        }
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, headline: &str, datetime: i64) -> RawNewsArticle {
        RawNewsArticle {
            id: Some(id),
            headline: Some(headline.to_string()),
            summary: Some("Summary".to_string()),
            source: None,
            url: Some(format!("https://news.example/{}", id)),
            datetime: Some(datetime),
            image: None,
            category: Some("top news".to_string()),
            related: Some("AAPL".to_string()),
        }
    }

    #[test]
    fn test_validity() {
        assert!(article(1, "Headline", 1_700_000_000).is_valid());
        assert!(!article(1, "  ", 1_700_000_000).is_valid());
        assert!(!article(1, "Headline", 0).is_valid());

        let mut missing_url = article(1, "Headline", 1);
        missing_url.url = None;
        assert!(!missing_url.is_valid());
        assert!(!RawNewsArticle::default().is_valid());
    }

    #[test]
    fn test_dedupe_key() {
        let key = article(7, "Headline", 1).dedupe_key();
        assert_eq!(key, "7-https://news.example/7-Headline");
    }

    #[test]
    fn test_company_format() {
        let formatted = MarketNewsArticle::company(article(10, " Headline ", 5), "TCS.NS", 2);
        assert_eq!(formatted.id, 12);
        assert_eq!(formatted.headline, "Headline");
        assert_eq!(formatted.category, "company");
        assert_eq!(formatted.related, "TCS.NS");
        assert_eq!(formatted.source, "Company News");
    }

    #[test]
    fn test_market_format_keeps_category() {
        let formatted = MarketNewsArticle::market(article(10, "Headline", 5), 0);
        assert_eq!(formatted.category, "top news");
        assert_eq!(formatted.related, "AAPL");
        assert_eq!(formatted.source, "Market News");
    }

    #[test]
    fn test_summary_truncation() {
        let mut long = article(1, "Headline", 1);
        long.summary = Some("x".repeat(400));
        let formatted = MarketNewsArticle::market(long, 0);
        assert_eq!(formatted.summary.len(), MARKET_SUMMARY_LIMIT + 3);
        assert!(formatted.summary.ends_with("..."));
    }
}
