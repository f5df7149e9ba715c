use std::collections::HashMap;

use http::Method;
use serde::Serialize;

use super::request::Request;

/// Per-asset map keyed by fiat code (`"usd"`), plus `"<fiat>_24h_change"`
/// entries when requested. Assets unknown upstream are simply absent.
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

#[derive(Clone, Debug, Serialize)]
pub struct SimplePriceRequest {
    pub ids: String,
    pub vs_currencies: String,
    pub include_24hr_change: bool,
}

impl SimplePriceRequest {
    pub fn new(ids: &[String], vs_currencies: &str, include_24hr_change: bool) -> Self {
        Self {
            ids: ids.join(","),
            vs_currencies: vs_currencies.to_string(),
            include_24hr_change,
        }
    }
}

impl Request for SimplePriceRequest {
    const METHOD: Method = Method::GET;
    type Response = SimplePriceResponse;

    fn endpoint(&self) -> String {
        "/api/v3/simple/price".to_string()
    }
}
