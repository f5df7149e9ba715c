use std::sync::Arc;

use dashboard_core_api::ConversionError;
use domain_model::ConversionRequest;
use tracker_core_api::{RateError, TrackerApi};

pub struct CrossRateCalculator<T: TrackerApi> {
    tracker_client: Arc<T>,
}

impl<T: TrackerApi> CrossRateCalculator<T> {
    pub fn new(tracker_client: Arc<T>) -> Self {
        Self { tracker_client }
    }

    /// User input coercion: absent, blank or unparseable amounts count as
    /// zero instead of failing the request.
    pub fn coerce_amount(input: Option<&str>) -> f64 {
        input
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0)
    }

    pub async fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
        let rate = self
            .tracker_client
            .exchange_rate(&request.source_asset, &request.destination.to_string())
            .await
            .map_err(|err| match err.downcast_ref::<RateError>() {
                Some(RateError::PriceUnavailable { .. }) => ConversionError::PriceUnavailable {
                    base: request.source_asset.clone(),
                    destination: request.destination.to_string(),
                },
                None => ConversionError::Fetch(err),
            })?;
        Ok(request.amount * rate)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::Result;
    use async_trait::async_trait;
    use domain_model::{AssetQuote, HistoryPoint};

    use super::*;

    struct StubTracker;

    #[async_trait]
    impl TrackerApi for StubTracker {
        async fn prices(&self, _: &[String]) -> Result<HashMap<String, AssetQuote>> {
            unimplemented!()
        }

        async fn history(&self, _: &str, _: u32) -> Result<Vec<HistoryPoint>> {
            unimplemented!()
        }

        async fn exchange_rate(&self, base: &str, target: &str) -> Result<f64> {
            match (base, target) {
                ("bitcoin", "eur") => Ok(46000.0),
                ("bitcoin", "ethereum") => Ok(20.0),
                (_, "eur") => Err(RateError::PriceUnavailable {
                    base: base.to_string(),
                    target: target.to_string(),
                }
                .into()),
                ("deadcoin", _) | (_, "deadcoin") => Err(RateError::PriceUnavailable {
                    base: base.to_string(),
                    target: target.to_string(),
                }
                .into()),
                _ => anyhow::bail!("tracker unreachable"),
            }
        }
    }

    fn calculator() -> CrossRateCalculator<StubTracker> {
        CrossRateCalculator::new(Arc::new(StubTracker))
    }

    #[tokio::test]
    async fn test_convert_to_fiat() {
        let request = ConversionRequest::new(2.0, "bitcoin", "eur");
        let converted = calculator().convert(&request).await.unwrap();
        assert_eq!(converted, 92000.0);
    }

    #[tokio::test]
    async fn test_convert_to_asset() {
        let request = ConversionRequest::new(1.5, "bitcoin", "ethereum");
        let converted = calculator().convert(&request).await.unwrap();
        assert_eq!(converted, 30.0);
    }

    #[tokio::test]
    async fn test_zero_amount_converts_to_zero() {
        let request = ConversionRequest::new(0.0, "bitcoin", "ethereum");
        let converted = calculator().convert(&request).await.unwrap();
        assert_eq!(converted, 0.0);
    }

    #[tokio::test]
    async fn test_round_trip_restores_amount() {
        let calculator = calculator();
        let amount = 1.25;

        let to_fiat = ConversionRequest::new(amount, "bitcoin", "eur");
        let in_eur = calculator.convert(&to_fiat).await.unwrap();
        // same snapshot, inverse leg computed from the same fiat price
        let restored = in_eur / 46000.0;

        assert!((restored - amount).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unavailable_price_is_distinct() {
        let request = ConversionRequest::new(1.0, "bitcoin", "deadcoin");
        let err = calculator().convert(&request).await.unwrap_err();
        assert!(matches!(err, ConversionError::PriceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_fetch() {
        let request = ConversionRequest::new(1.0, "bitcoin", "unreachable");
        let err = calculator().convert(&request).await.unwrap_err();
        assert!(matches!(err, ConversionError::Fetch(_)));
    }

    #[test]
    fn test_amount_coercion() {
        assert_eq!(CrossRateCalculator::<StubTracker>::coerce_amount(None), 0.0);
        assert_eq!(CrossRateCalculator::<StubTracker>::coerce_amount(Some("")), 0.0);
        assert_eq!(CrossRateCalculator::<StubTracker>::coerce_amount(Some("abc")), 0.0);
        assert_eq!(CrossRateCalculator::<StubTracker>::coerce_amount(Some("1.5")), 1.5);
        assert_eq!(CrossRateCalculator::<StubTracker>::coerce_amount(Some(" 2 ")), 2.0);
    }
}
