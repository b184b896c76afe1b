//! Company profile, financial metrics and executive models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Company profile from the `/stock/profile2` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub finnhub_industry: Option<String>,
    #[serde(default)]
    pub ipo: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    /// Market capitalization in millions
    #[serde(default)]
    pub market_capitalization: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub share_outstanding: Option<f64>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub weburl: Option<String>,
}

impl CompanyProfile {
    /// Best display name: company name, then ticker.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.ticker.as_deref().filter(|ticker| !ticker.is_empty()))
    }
}

/// Basic financials from the `/stock/metric` endpoint.
///
/// The metric map is loosely typed; values may be numbers, strings or null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicFinancials {
    #[serde(default)]
    pub metric: HashMap<String, Value>,
}

impl BasicFinancials {
    /// Numeric metric value, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.metric.get(key).and_then(Value::as_f64)
    }
}

/// Company executive from the `/stock/executive` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockExecutive {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// The executive endpoint answers either `{ "data": [...] }` or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ExecutivesResponse {
    Wrapped {
        #[serde(default)]
        data: Vec<StockExecutive>,
    },
    List(Vec<StockExecutive>),
}

impl ExecutivesResponse {
    pub(crate) fn into_vec(self) -> Vec<StockExecutive> {
        match self {
            Self::Wrapped { data } => data,
            Self::List(list) => list,
        }
    }
}
