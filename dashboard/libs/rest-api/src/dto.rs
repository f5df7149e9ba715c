use serde::{Deserialize, Serialize};

/// Conversion outcome: exactly one of `result` and `error` is set, so the
/// front end can tell a failed calculation apart from one still loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionDto {
    pub result: Option<String>,
    pub error: Option<String>,
}

impl ConversionDto {
    pub fn result(amount: String) -> Self {
        Self {
            result: Some(amount),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            result: None,
            error: Some(message),
        }
    }
}
