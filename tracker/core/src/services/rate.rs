use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use domain_model::{ConversionTarget, Fiat};
use tracker_core_api::RateError;
use tracker_upstream_api::UpstreamApi;

pub struct RateService<U: UpstreamApi> {
    upstream_client: Arc<U>,
}

impl<U: UpstreamApi> RateService<U> {
    pub fn new(upstream_client: Arc<U>) -> Self {
        Self { upstream_client }
    }

    /// Rate from `base` to `target`. A fiat target is quoted directly in
    /// that fiat; an asset target is derived from both USD prices fetched
    /// in one batched call.
    pub async fn rate(&self, base: &str, target: &str) -> Result<f64> {
        debug!("Computing exchange rate '{base}' -> '{target}'");
        match ConversionTarget::parse(target) {
            ConversionTarget::Fiat(fiat) => self.fiat_rate(base, fiat).await,
            ConversionTarget::Asset(asset_id) => self.cross_rate(base, &asset_id).await,
        }
    }

    async fn fiat_rate(&self, base: &str, fiat: Fiat) -> Result<f64> {
        let ids = vec![base.to_string()];
        let entries = self.upstream_client.simple_prices(&ids, fiat, false).await?;
        entries
            .get(base)
            .map(|entry| entry.price)
            .ok_or_else(|| price_unavailable(base, fiat.code()))
    }

    async fn cross_rate(&self, base: &str, target: &str) -> Result<f64> {
        let ids = vec![base.to_string(), target.to_string()];
        let entries = self
            .upstream_client
            .simple_prices(&ids, Fiat::Usd, false)
            .await?;
        let base_price = entries.get(base).map(|entry| entry.price);
        let target_price = entries.get(target).map(|entry| entry.price);
        match (base_price, target_price) {
            (Some(base_price), Some(target_price)) if target_price != 0.0 => {
                Ok(base_price / target_price)
            }
            _ => Err(price_unavailable(base, target)),
        }
    }
}

fn price_unavailable(base: &str, target: &str) -> anyhow::Error {
    RateError::PriceUnavailable {
        base: base.to_string(),
        target: target.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

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
            _: bool,
        ) -> Result<HashMap<String, PriceEntry>> {
            let mut entries = HashMap::new();
            for id in ids {
                let price = match (id.as_str(), fiat) {
                    ("bitcoin", Fiat::Usd) => Some(50000.0),
                    ("bitcoin", Fiat::Eur) => Some(46000.0),
                    ("ethereum", Fiat::Usd) => Some(2500.0),
                    ("deadcoin", Fiat::Usd) => Some(0.0),
                    _ => None,
                };
                if let Some(price) = price {
                    entries.insert(id.clone(), PriceEntry { price, change_24h_pct: None });
                }
            }
            Ok(entries)
        }

        async fn market_chart(&self, _: &str, _: Fiat, _: u32) -> Result<Vec<HistoryPoint>> {
            unimplemented!()
        }
    }

    fn service() -> RateService<StubUpstream> {
        RateService::new(Arc::new(StubUpstream))
    }

    #[tokio::test]
    async fn test_fiat_rate() {
        let rate = service().rate("bitcoin", "eur").await.unwrap();
        assert_eq!(rate, 46000.0);
    }

    #[tokio::test]
    async fn test_cross_rate() {
        let rate = service().rate("bitcoin", "ethereum").await.unwrap();
        assert_eq!(rate, 20.0);
    }

    #[tokio::test]
    async fn test_missing_asset_is_unavailable() {
        let err = service().rate("bitcoin", "shiba-inu").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RateError>(),
            Some(RateError::PriceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_target_price_is_unavailable() {
        let err = service().rate("bitcoin", "deadcoin").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RateError>(),
            Some(RateError::PriceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_fiat_price_is_unavailable() {
        let err = service().rate("ethereum", "eur").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RateError>(),
            Some(RateError::PriceUnavailable { .. })
        ));
    }
}
