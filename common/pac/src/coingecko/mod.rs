pub use error::{CoinGeckoError, Result};

mod error;
pub mod rest;
