pub use crate::upstream::CoinGeckoUpstream;

mod upstream;
