use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use domain_model::{AssetQuote, AssetRegistry, Fiat};
use tracker_upstream_api::UpstreamApi;

pub struct QuoteService<U: UpstreamApi> {
    upstream_client: Arc<U>,
    registry: Arc<AssetRegistry>,
}

impl<U: UpstreamApi> QuoteService<U> {
    pub fn new(upstream_client: Arc<U>, registry: Arc<AssetRegistry>) -> Self {
        Self {
            upstream_client,
            registry,
        }
    }

    /// Batched USD quotes for the given ids, every tracked asset when empty.
    /// A missing upstream 24h change is reported as 0.
    pub async fn quotes(&self, ids: &[String]) -> Result<HashMap<String, AssetQuote>> {
        let ids: Vec<String> = if ids.is_empty() {
            self.registry.ids().map(str::to_string).collect()
        } else {
            ids.to_vec()
        };
        debug!("Fetching quotes for {} assets", ids.len());

        let entries = self
            .upstream_client
            .simple_prices(&ids, Fiat::Usd, true)
            .await?;
        let quotes = entries
            .into_iter()
            .map(|(asset_id, entry)| {
                let quote = AssetQuote {
                    asset_id: asset_id.clone(),
                    price_usd: entry.price,
                    change_24h_pct: entry.change_24h_pct.unwrap_or(0.0),
                };
                (asset_id, quote)
            })
            .collect();
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use domain_model::HistoryPoint;
    use tracker_upstream_api::PriceEntry;

    use super::*;

    struct StubUpstream;

    #[async_trait]
    impl UpstreamApi for StubUpstream {
        async fn simple_prices(
            &self,
            ids: &[String],
            fiat: Fiat,
            include_24h_change: bool,
        ) -> Result<HashMap<String, PriceEntry>> {
            assert_eq!(fiat, Fiat::Usd);
            assert!(include_24h_change);
            let mut entries = HashMap::new();
            if ids.contains(&"bitcoin".to_string()) {
                entries.insert(
                    "bitcoin".to_string(),
                    PriceEntry { price: 50000.0, change_24h_pct: Some(2.5) },
                );
            }
            if ids.contains(&"ethereum".to_string()) {
                entries.insert(
                    "ethereum".to_string(),
                    PriceEntry { price: 3000.0, change_24h_pct: None },
                );
            }
            Ok(entries)
        }

        async fn market_chart(&self, _: &str, _: Fiat, _: u32) -> Result<Vec<HistoryPoint>> {
            unimplemented!()
        }
    }

    fn service() -> QuoteService<StubUpstream> {
        QuoteService::new(Arc::new(StubUpstream), Arc::new(AssetRegistry::tracked()))
    }

    #[tokio::test]
    async fn test_quotes_for_explicit_ids() {
        let quotes = service()
            .quotes(&["bitcoin".to_string(), "ethereum".to_string()])
            .await
            .unwrap();

        assert_eq!(quotes.len(), 2);
        let bitcoin = quotes.get("bitcoin").unwrap();
        assert_eq!(bitcoin.price_usd, 50000.0);
        assert_eq!(bitcoin.change_24h_pct, 2.5);
    }

    #[tokio::test]
    async fn test_missing_change_defaults_to_zero() {
        let quotes = service()
            .quotes(&["ethereum".to_string()])
            .await
            .unwrap();

        assert_eq!(quotes.get("ethereum").unwrap().change_24h_pct, 0.0);
    }

    #[tokio::test]
    async fn test_empty_ids_default_to_tracked_assets() {
        let quotes = service().quotes(&[]).await.unwrap();

        // stub only knows two of the 21 tracked ids
        assert_eq!(quotes.len(), 2);
        assert!(quotes.contains_key("bitcoin"));
        assert!(quotes.contains_key("ethereum"));
    }
}
