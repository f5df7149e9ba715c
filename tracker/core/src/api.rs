use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use domain_model::{AssetQuote, AssetRegistry, HistoryPoint};
use tracker_core_api::TrackerApi;
use tracker_upstream_api::UpstreamApi;

use crate::services::history::HistoryService;
use crate::services::quote::QuoteService;
use crate::services::rate::RateService;

pub struct Tracker<U: UpstreamApi> {
    quote_service: QuoteService<U>,
    history_service: HistoryService<U>,
    rate_service: RateService<U>,
}

impl<U: UpstreamApi> Tracker<U> {
    pub fn new(upstream_client: U, registry: AssetRegistry) -> Self {
        let upstream_client = Arc::new(upstream_client);
        let registry = Arc::new(registry);
        let quote_service = QuoteService::new(Arc::clone(&upstream_client), registry);
        let history_service = HistoryService::new(Arc::clone(&upstream_client));
        let rate_service = RateService::new(upstream_client);
        Self {
            quote_service,
            history_service,
            rate_service,
        }
    }
}

#[async_trait]
impl<U: UpstreamApi> TrackerApi for Tracker<U> {
    async fn prices(&self, ids: &[String]) -> Result<HashMap<String, AssetQuote>> {
        self.quote_service.quotes(ids).await
    }

    async fn history(&self, asset_id: &str, days: u32) -> Result<Vec<HistoryPoint>> {
        self.history_service.history(asset_id, days).await
    }

    async fn exchange_rate(&self, base: &str, target: &str) -> Result<f64> {
        self.rate_service.rate(base, target).await
    }
}
