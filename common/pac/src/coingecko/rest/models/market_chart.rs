use http::Method;
use serde::{Deserialize, Serialize};

use super::request::Request;

#[derive(Clone, Debug, Serialize)]
pub struct MarketChartRequest {
    #[serde(skip)]
    pub id: String,
    pub vs_currency: String,
    pub days: u32,
}

impl MarketChartRequest {
    pub fn new(id: &str, vs_currency: &str, days: u32) -> Self {
        Self {
            id: id.to_string(),
            vs_currency: vs_currency.to_string(),
            days,
        }
    }
}

/// Time-series body: `[[timestamp_millis, price], ...]` in source order.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, f64)>,
}

impl Request for MarketChartRequest {
    const METHOD: Method = Method::GET;
    type Response = MarketChartResponse;

    fn endpoint(&self) -> String {
        format!("/api/v3/coins/{}/market_chart", self.id)
    }
}
