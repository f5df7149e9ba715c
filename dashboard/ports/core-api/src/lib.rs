use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait DashboardApi: Send + Sync + 'static {
    /// One refresh cycle: fetch current quotes and rebuild every view model
    /// from zero. Failures degrade to an empty view plus a warning message,
    /// never an error.
    async fn refresh(&self) -> DashboardSnapshot;

    /// Price-history chart for one tracked asset, rendered to HTML.
    async fn history_chart_html(&self, asset_id: &str, days: u32) -> Result<String>;

    /// Currency-exchange calculation; returns the formatted converted amount.
    async fn convert(
        &self,
        amount_input: Option<&str>,
        source_asset: &str,
        destination: &str,
    ) -> std::result::Result<String, ConversionError>;
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Price unavailable for conversion from '{base}' to '{destination}'")]
    PriceUnavailable { base: String, destination: String },

    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Zero change counts as non-negative, so it points up.
    pub fn from_change(change_24h_pct: f64) -> Self {
        if change_24h_pct >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayCard {
    pub asset_id: String,
    pub display_name: String,
    pub glyph: String,
    pub price: String,
    pub change: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListItem {
    pub glyph: String,
    pub display_name: String,
    pub price: String,
    pub change: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoverEntry {
    pub glyph: String,
    pub display_name: String,
    pub change: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DashboardViewModel {
    pub cards: Vec<DisplayCard>,
    pub list_items: Vec<ListItem>,
    pub movers: Vec<MoverEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    pub view: DashboardViewModel,
    pub warning: Option<String>,
}
