use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use domain_model::{Fiat, HistoryPoint};
use tracker_upstream_api::UpstreamApi;

pub struct HistoryService<U: UpstreamApi> {
    upstream_client: Arc<U>,
}

impl<U: UpstreamApi> HistoryService<U> {
    pub fn new(upstream_client: Arc<U>) -> Self {
        Self { upstream_client }
    }

    /// USD time series for one asset. Source ordering is trusted as-is.
    pub async fn history(&self, asset_id: &str, days: u32) -> Result<Vec<HistoryPoint>> {
        debug!("Fetching {days} days of history for '{asset_id}'");
        self.upstream_client
            .market_chart(asset_id, Fiat::Usd, days)
            .await
    }
}
