use serde::{Deserialize, Serialize};

/// Latest quote as returned by the `/quote` endpoint.
///
/// Field names follow the provider's single-letter wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Current price
    #[serde(default)]
    pub c: Option<f64>,
    /// Change
    #[serde(default)]
    pub d: Option<f64>,
    /// Percent change
    #[serde(default)]
    pub dp: Option<f64>,
    /// High price of the day
    #[serde(default)]
    pub h: Option<f64>,
    /// Low price of the day
    #[serde(default)]
    pub l: Option<f64>,
    /// Open price of the day
    #[serde(default)]
    pub o: Option<f64>,
    /// Previous close
    #[serde(default)]
    pub pc: Option<f64>,
    /// Timestamp (Unix)
    #[serde(default)]
    pub t: Option<i64>,
}

impl StockQuote {
    pub fn current_price(&self) -> f64 {
        self.c.unwrap_or(0.0)
    }

    pub fn change(&self) -> f64 {
        self.d.unwrap_or(0.0)
    }

    pub fn change_percent(&self) -> f64 {
        self.dp.unwrap_or(0.0)
    }
}

/// Daily candles from the `/stock/candle` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    /// Close prices
    #[serde(default)]
    pub c: Vec<f64>,
    /// High prices
    #[serde(default)]
    pub h: Vec<f64>,
    /// Low prices
    #[serde(default)]
    pub l: Vec<f64>,
    /// Open prices
    #[serde(default)]
    pub o: Vec<f64>,
    /// Timestamps (Unix)
    #[serde(default)]
    pub t: Vec<i64>,
    /// Volumes
    #[serde(default)]
    pub v: Vec<f64>,
    /// Status: "ok" or "no_data"
    #[serde(default)]
    pub s: String,
}

impl CandleSeries {
    pub fn is_ok(&self) -> bool {
        self.s == "ok"
    }
}
