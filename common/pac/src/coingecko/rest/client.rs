use derive_builder::Builder;
use fehler::{throw, throws};
use http::Method;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::from_str;
use serde_urlencoded::to_string as to_ustring;
use tracing::{error, trace};
use url::Url;

use crate::coingecko::error::CoinGeckoError;

use super::models::Request;

#[derive(Clone, Builder)]
pub struct CoinGeckoRest {
    url: String,
    client: Client,
    #[builder(default, setter(strip_option))]
    api_key: Option<String>,
}

impl CoinGeckoRest {
    pub fn new(url: &str) -> Self {
        CoinGeckoRest {
            url: url.to_string(),
            client: Client::new(),
            api_key: None,
        }
    }

    pub fn with_api_key(url: &str, api_key: &str) -> Self {
        CoinGeckoRest {
            url: url.to_string(),
            client: Client::new(),
            api_key: Some(api_key.to_string()),
        }
    }

    pub fn builder() -> CoinGeckoRestBuilder {
        CoinGeckoRestBuilder::default()
    }

    #[throws(CoinGeckoError)]
    pub async fn request<R>(&self, req: R) -> R::Response
    where
        R: Request,
        R::Response: DeserializeOwned,
    {
        let url = format!("{}{}", self.url, req.endpoint());
        let mut url = Url::parse(&url)?;
        if R::METHOD == Method::GET && R::HAS_PAYLOAD {
            url.set_query(Some(&to_ustring(&req)?));
        }
        trace!("Request url: {url:?}");

        let mut builder = self.client.request(R::METHOD, url);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("x-cg-demo-api-key", api_key);
        }

        let resp = builder
            .header("accept", "application/json")
            .header("user-agent", "coingecko-rs")
            .send()
            .await?;
        self.handle_response(resp).await?
    }

    #[throws(CoinGeckoError)]
    async fn handle_response<T: DeserializeOwned>(&self, resp: Response) -> T {
        let status = resp.status();
        let payload = resp.text().await?;
        trace!("Response: {payload}");

        if !status.is_success() {
            throw!(CoinGeckoError::ErrorStatus {
                status: status.as_u16(),
                body: payload,
            })
        }
        match from_str::<T>(&payload) {
            Ok(v) => v,
            Err(e) => {
                error!("Cannot deserialize response from {}: {}", payload, e);
                throw!(CoinGeckoError::CannotDeserializeResponse(payload))
            }
        }
    }
}
