use std::collections::HashMap;

/// Static display data for a tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub glyph: &'static str,
}

/// Immutable mapping from asset id to display data, ordered by tracking
/// position. Built once at startup and shared by reference.
#[derive(Debug)]
pub struct AssetRegistry {
    entries: &'static [AssetInfo],
    index: HashMap<&'static str, usize>,
}

impl AssetRegistry {
    /// The default registry over the 21 tracked assets.
    pub fn tracked() -> Self {
        Self::from_entries(TRACKED_ASSETS)
    }

    fn from_entries(entries: &'static [AssetInfo]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, info)| (info.id, position))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, asset_id: &str) -> Option<&AssetInfo> {
        self.index.get(asset_id).map(|&position| &self.entries[position])
    }

    /// Tracking position of an asset, used for ordering and tie-breaking.
    pub fn position(&self, asset_id: &str) -> Option<usize> {
        self.index.get(asset_id).copied()
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.index.contains_key(asset_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|info| info.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const TRACKED_ASSETS: &[AssetInfo] = &[
    AssetInfo { id: "bitcoin", display_name: "Bitcoin", glyph: "₿" },
    AssetInfo { id: "ethereum", display_name: "Ethereum", glyph: "Ξ" },
    AssetInfo { id: "binancecoin", display_name: "Binance Coin", glyph: "BNB" },
    AssetInfo { id: "cardano", display_name: "Cardano", glyph: "ADA" },
    AssetInfo { id: "solana", display_name: "Solana", glyph: "SOL" },
    AssetInfo { id: "ripple", display_name: "Ripple", glyph: "XRP" },
    AssetInfo { id: "dogecoin", display_name: "Dogecoin", glyph: "DOGE" },
    AssetInfo { id: "polkadot", display_name: "Polkadot", glyph: "DOT" },
    AssetInfo { id: "chainlink", display_name: "Chainlink", glyph: "LINK" },
    AssetInfo { id: "polygon-ecosystem-token", display_name: "Polygon", glyph: "MATIC" },
    AssetInfo { id: "avalanche-2", display_name: "Avalanche", glyph: "AVAX" },
    AssetInfo { id: "litecoin", display_name: "Litecoin", glyph: "LTC" },
    AssetInfo { id: "bitcoin-cash", display_name: "Bitcoin Cash", glyph: "BCH" },
    AssetInfo { id: "stellar", display_name: "Stellar", glyph: "XLM" },
    AssetInfo { id: "tron", display_name: "Tron", glyph: "TRX" },
    AssetInfo { id: "cosmos", display_name: "Cosmos", glyph: "ATOM" },
    AssetInfo { id: "algorand", display_name: "Algorand", glyph: "ALGO" },
    AssetInfo { id: "vechain", display_name: "VeChain", glyph: "VET" },
    AssetInfo { id: "iota", display_name: "IOTA", glyph: "MIOTA" },
    AssetInfo { id: "monero", display_name: "Monero", glyph: "XMR" },
    AssetInfo { id: "eos", display_name: "EOS", glyph: "EOS" },
];
