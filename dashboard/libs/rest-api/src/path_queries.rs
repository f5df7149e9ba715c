use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

#[serde_inline_default]
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartQuery {
    #[serde_inline_default(7)]
    pub days: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConvertQuery {
    /// Raw user input; unparseable amounts are treated as zero downstream.
    pub amount: Option<String>,
    pub send: String,
    pub receive: String,
}
