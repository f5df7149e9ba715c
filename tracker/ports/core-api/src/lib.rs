use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use domain_model::{AssetQuote, HistoryPoint};

#[async_trait]
pub trait TrackerApi: Send + Sync + 'static {
    /// Current quotes in USD for the given asset ids, every tracked asset
    /// when `ids` is empty.
    async fn prices(&self, ids: &[String]) -> Result<HashMap<String, AssetQuote>>;

    /// Price history for one asset over the last `days` days.
    async fn history(&self, asset_id: &str, days: u32) -> Result<Vec<HistoryPoint>>;

    /// Rate from `base` (asset id) to `target` (asset id or fiat code).
    async fn exchange_rate(&self, base: &str, target: &str) -> Result<f64>;
}

/// Raised when a requested pair has no usable price: the upstream response
/// lacks one of the sides, or the target price is exactly zero.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Price unavailable for pair '{base}/{target}'")]
    PriceUnavailable { base: String, target: String },
}
