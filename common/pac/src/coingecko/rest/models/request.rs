use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait Request: Serialize {
    const METHOD: Method = Method::GET;
    const HAS_PAYLOAD: bool = true;
    type Response: DeserializeOwned;

    /// Endpoint path, may embed path parameters from the request itself.
    fn endpoint(&self) -> String;
}
