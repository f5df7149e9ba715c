mod client;
mod models;

pub use client::{CoinGeckoRest, CoinGeckoRestBuilder};
pub use models::*;
