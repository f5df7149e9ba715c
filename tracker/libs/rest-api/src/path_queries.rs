use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

#[derive(Debug, Deserialize, Serialize)]
pub struct PricesQuery {
    /// Comma-separated asset ids; all tracked assets when absent.
    pub ids: Option<String>,
}

#[serde_inline_default]
#[derive(Debug, Deserialize, Serialize)]
pub struct HistoryQuery {
    #[serde_inline_default(7)]
    pub days: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExchangeRateQuery {
    pub base: String,
    pub target: String,
}
