use serde::Serialize;

/// A normalized quote snapshot for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    /// The ticker as reported by the provider (e.g., `AAPL`).
    pub symbol: String,
    /// The display name of the company (e.g., `Apple Inc.`).
    pub name: String,
    /// The listing exchange (e.g., `NASDAQ`).
    pub exchange: String,
    /// Quote currency, when the provider reports one.
    pub currency: Option<String>,
    /// Last price (the provider's `close`).
    pub price: f64,
    /// Absolute change against the previous close.
    pub change: f64,
    /// Percent change against the previous close.
    pub change_percent: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    pub previous_close: f64,
    pub volume: Option<u64>,
    /// 52-week high, only when the provider includes it.
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low, only when the provider includes it.
    pub fifty_two_week_low: Option<f64>,
    /// The day range as `"<low> - <high>"`, using the provider's own formatting.
    #[serde(rename = "range")]
    pub day_range: String,
}
