use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use domain_model::{AssetQuote, HistoryPoint};

/// Wire shape of one quote: `{"price": .., "change_24h": ..}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPriceDto {
    pub price: f64,
    pub change_24h: f64,
}

impl From<AssetQuote> for AssetPriceDto {
    fn from(value: AssetQuote) -> Self {
        Self {
            price: value.price_usd,
            change_24h: value.change_24h_pct,
        }
    }
}

impl AssetPriceDto {
    pub fn into_quote(self, asset_id: &str) -> AssetQuote {
        AssetQuote {
            asset_id: asset_id.to_string(),
            price_usd: self.price,
            change_24h_pct: self.change_24h,
        }
    }
}

/// Wire shape of a time series: `{"prices": [[millis, price], ...]}`,
/// carried through from the upstream body unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistoryDto {
    pub prices: Vec<(i64, f64)>,
}

impl From<Vec<HistoryPoint>> for PriceHistoryDto {
    fn from(points: Vec<HistoryPoint>) -> Self {
        Self {
            prices: points
                .into_iter()
                .map(|point| (point.timestamp.timestamp_millis(), point.price_usd))
                .collect(),
        }
    }
}

impl PriceHistoryDto {
    pub fn into_points(self) -> Vec<HistoryPoint> {
        self.prices
            .into_iter()
            .map(|(millis, price_usd)| HistoryPoint {
                timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
                price_usd,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateDto {
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_dto_wire_shape() {
        let quote = AssetQuote::new("bitcoin", 50000.0, 2.5);
        let json = serde_json::to_value(AssetPriceDto::from(quote)).unwrap();
        assert_eq!(json, serde_json::json!({"price": 50000.0, "change_24h": 2.5}));
    }

    #[test]
    fn test_history_dto_passes_upstream_body_through_unchanged() {
        let points = vec![
            HistoryPoint { timestamp: Utc.timestamp_millis_opt(1000).unwrap(), price_usd: 50000.0 },
            HistoryPoint { timestamp: Utc.timestamp_millis_opt(2000).unwrap(), price_usd: 51000.0 },
        ];
        let json = serde_json::to_string(&PriceHistoryDto::from(points)).unwrap();
        assert_eq!(json, r#"{"prices":[[1000,50000.0],[2000,51000.0]]}"#);
    }

    #[test]
    fn test_history_dto_round_trip_preserves_order() {
        let dto: PriceHistoryDto =
            serde_json::from_str(r#"{"prices":[[1000,50000],[2000,51000]]}"#).unwrap();
        let points = dto.into_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp.timestamp_millis(), 1000);
        assert_eq!(points[1].price_usd, 51000.0);
    }
}
