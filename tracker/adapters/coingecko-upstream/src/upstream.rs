use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use domain_model::{Fiat, HistoryPoint};
use pac::coingecko::rest::{CoinGeckoRest, MarketChartRequest, SimplePriceRequest};
use tracker_upstream_api::{PriceEntry, UpstreamApi};

pub struct CoinGeckoUpstream {
    rest_client: CoinGeckoRest,
}

impl CoinGeckoUpstream {
    pub fn new(http_url: &str, api_key: Option<&str>) -> Self {
        let rest_client = match api_key {
            Some(api_key) => CoinGeckoRest::with_api_key(http_url, api_key),
            None => CoinGeckoRest::new(http_url),
        };
        Self { rest_client }
    }
}

#[async_trait]
impl UpstreamApi for CoinGeckoUpstream {
    async fn simple_prices(
        &self,
        ids: &[String],
        fiat: Fiat,
        include_24h_change: bool,
    ) -> Result<HashMap<String, PriceEntry>> {
        let request = SimplePriceRequest::new(ids, fiat.code(), include_24h_change);
        let response = self
            .rest_client
            .request(request)
            .await
            .context("Error fetching simple prices from upstream")?;

        let change_key = fiat.change_24h_key();
        let entries = response
            .into_iter()
            .filter_map(|(asset_id, prices)| {
                prices.get(fiat.code()).map(|&price| {
                    let entry = PriceEntry {
                        price,
                        change_24h_pct: prices.get(&change_key).copied(),
                    };
                    (asset_id, entry)
                })
            })
            .collect();
        Ok(entries)
    }

    async fn market_chart(&self, asset_id: &str, fiat: Fiat, days: u32) -> Result<Vec<HistoryPoint>> {
        let request = MarketChartRequest::new(asset_id, fiat.code(), days);
        let response = self
            .rest_client
            .request(request)
            .await
            .with_context(|| format!("Error fetching market chart for '{asset_id}'"))?;

        let points = response
            .prices
            .into_iter()
            .map(|(millis, price_usd)| HistoryPoint {
                timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
                price_usd,
            })
            .collect();
        Ok(points)
    }
}
