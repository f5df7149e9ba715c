use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_urlencoded::to_string;
use tracing::trace;

use domain_model::{AssetQuote, HistoryPoint};
use tracker_core_api::TrackerApi;
use tracker_rest_api::dto::{AssetPriceDto, ExchangeRateDto, PriceHistoryDto};
use tracker_rest_api::endpoints::{GET_EXCHANGE_RATE, GET_PRICE, GET_PRICE_HISTORY};
use tracker_rest_api::path_queries::{ExchangeRateQuery, HistoryQuery, PricesQuery};

pub struct TrackerRestClient {
    url: String,
    client: Client,
}

impl TrackerRestClient {
    pub fn new(url: &str) -> Self {
        let mut url = String::from(url);
        if !url.starts_with("http") {
            url = format!("http://{url}");
        }
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TrackerApi for TrackerRestClient {
    async fn prices(&self, ids: &[String]) -> Result<HashMap<String, AssetQuote>> {
        let query = PricesQuery {
            ids: if ids.is_empty() { None } else { Some(ids.join(",")) },
        };

        let endpoint = format!("{}{}", self.url, GET_PRICE);
        let mut url = Url::parse(&endpoint)?;
        url.set_query(Some(&to_string(&query)?));
        trace!("Request url: {url:?}");
        let result: HashMap<String, AssetPriceDto> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(result
            .into_iter()
            .map(|(asset_id, dto)| {
                let quote = dto.into_quote(&asset_id);
                (asset_id, quote)
            })
            .collect())
    }

    async fn history(&self, asset_id: &str, days: u32) -> Result<Vec<HistoryPoint>> {
        let query = HistoryQuery { days };

        let path = GET_PRICE_HISTORY.replace(":asset_id", asset_id);
        let endpoint = format!("{}{}", self.url, path);
        let mut url = Url::parse(&endpoint)?;
        url.set_query(Some(&to_string(&query)?));
        trace!("Request url: {url:?}");
        let result: PriceHistoryDto = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(result.into_points())
    }

    async fn exchange_rate(&self, base: &str, target: &str) -> Result<f64> {
        let query = ExchangeRateQuery {
            base: base.to_string(),
            target: target.to_string(),
        };

        let endpoint = format!("{}{}", self.url, GET_EXCHANGE_RATE);
        let mut url = Url::parse(&endpoint)?;
        url.set_query(Some(&to_string(&query)?));
        trace!("Request url: {url:?}");
        let result: ExchangeRateDto = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(result.rate)
    }
}
