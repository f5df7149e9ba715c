use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoinGeckoError>;

#[derive(Debug, Error)]
pub enum CoinGeckoError {
    #[error("Cannot deserialize response from {0}")]
    CannotDeserializeResponse(String),

    #[error("Upstream responded with status {status}: {body}")]
    ErrorStatus { status: u16, body: String },

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    UrlEncoding(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    HttpRequest(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
