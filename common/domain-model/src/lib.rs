use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::registry::{AssetInfo, AssetRegistry};

mod registry;

/// Current price of a single tracked asset, rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetQuote {
    pub asset_id: String,
    pub price_usd: f64,
    pub change_24h_pct: f64,
}

impl AssetQuote {
    pub fn new(asset_id: &str, price_usd: f64, change_24h_pct: f64) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            price_usd,
            change_24h_pct,
        }
    }
}

/// One sample of an asset's price history. Sequences keep the upstream
/// ordering, ascending by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub price_usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fiat {
    Usd,
    Eur,
}

impl Fiat {
    pub fn code(&self) -> &'static str {
        match self {
            Fiat::Usd => "usd",
            Fiat::Eur => "eur",
        }
    }

    /// Key under which the upstream reports the 24h change for this fiat.
    pub fn change_24h_key(&self) -> String {
        format!("{}_24h_change", self.code())
    }
}

impl fmt::Display for Fiat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Fiat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usd" => Ok(Fiat::Usd),
            "eur" => Ok(Fiat::Eur),
            code => bail!("Unsupported fiat code: '{code}'"),
        }
    }
}

/// Destination of a conversion: either a fiat code or a tracked asset id.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionTarget {
    Fiat(Fiat),
    Asset(String),
}

impl ConversionTarget {
    pub fn parse(code: &str) -> Self {
        Fiat::from_str(code)
            .map(ConversionTarget::Fiat)
            .unwrap_or_else(|_| ConversionTarget::Asset(code.to_string()))
    }
}

impl fmt::Display for ConversionTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionTarget::Fiat(fiat) => write!(f, "{fiat}"),
            ConversionTarget::Asset(id) => write!(f, "{id}"),
        }
    }
}

/// A single conversion request, computed per call and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source_asset: String,
    pub destination: ConversionTarget,
}

impl ConversionRequest {
    pub fn new(amount: f64, source_asset: &str, destination: &str) -> Self {
        Self {
            amount,
            source_asset: source_asset.to_string(),
            destination: ConversionTarget::parse(destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiat_parsing() {
        assert_eq!(Fiat::from_str("usd").unwrap(), Fiat::Usd);
        assert_eq!(Fiat::from_str("EUR").unwrap(), Fiat::Eur);
        assert!(Fiat::from_str("bitcoin").is_err());
        assert_eq!(Fiat::Eur.change_24h_key(), "eur_24h_change");
    }

    #[test]
    fn test_conversion_target_parsing() {
        assert_eq!(ConversionTarget::parse("usd"), ConversionTarget::Fiat(Fiat::Usd));
        assert_eq!(
            ConversionTarget::parse("ethereum"),
            ConversionTarget::Asset("ethereum".to_string())
        );
    }
}
