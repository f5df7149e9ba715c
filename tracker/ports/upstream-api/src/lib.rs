use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use domain_model::{Fiat, HistoryPoint};

/// Price of a single asset in one fiat, as the upstream provider reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEntry {
    pub price: f64,
    pub change_24h_pct: Option<f64>,
}

#[async_trait]
pub trait UpstreamApi: Send + Sync + 'static {
    /// Batched price lookup. Assets unknown upstream are absent from the map.
    async fn simple_prices(
        &self,
        ids: &[String],
        fiat: Fiat,
        include_24h_change: bool,
    ) -> Result<HashMap<String, PriceEntry>>;

    /// Time series for one asset over the last `days` days, source order.
    async fn market_chart(&self, asset_id: &str, fiat: Fiat, days: u32) -> Result<Vec<HistoryPoint>>;
}
