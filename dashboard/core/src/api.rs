use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::error;

use dashboard_chart_builder_api::ChartBuilderApi;
use dashboard_core_api::{ConversionError, DashboardApi, DashboardSnapshot};
use domain_model::{AssetRegistry, ConversionRequest};
use tracker_core_api::TrackerApi;

use crate::convert::CrossRateCalculator;
use crate::{format, view_model};

const PRICES_WARNING: &str = "Error fetching prices. Ensure the tracker backend is running.";

pub struct Dashboard<T: TrackerApi, C: ChartBuilderApi> {
    tracker_client: Arc<T>,
    chart_builder: C,
    registry: AssetRegistry,
    calculator: CrossRateCalculator<T>,
}

impl<T: TrackerApi, C: ChartBuilderApi> Dashboard<T, C> {
    pub fn new(tracker_client: T, chart_builder: C) -> Self {
        let tracker_client = Arc::new(tracker_client);
        let calculator = CrossRateCalculator::new(Arc::clone(&tracker_client));
        Self {
            tracker_client,
            chart_builder,
            registry: AssetRegistry::tracked(),
            calculator,
        }
    }

    fn degraded(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            view: Default::default(),
            warning: Some(PRICES_WARNING.to_string()),
        }
    }
}

#[async_trait]
impl<T: TrackerApi, C: ChartBuilderApi> DashboardApi for Dashboard<T, C> {
    async fn refresh(&self) -> DashboardSnapshot {
        let quotes = match self.tracker_client.prices(&[]).await {
            Ok(quotes) => quotes,
            Err(err) => {
                error!("Error fetching prices from tracker: {err}");
                return self.degraded();
            }
        };
        if quotes.is_empty() {
            return self.degraded();
        }

        match view_model::build(&quotes, &self.registry) {
            Ok(view) => DashboardSnapshot { view, warning: None },
            Err(err) => {
                error!("Error building dashboard view models: {err}");
                self.degraded()
            }
        }
    }

    async fn history_chart_html(&self, asset_id: &str, days: u32) -> Result<String> {
        let info = self
            .registry
            .get(asset_id)
            .ok_or_else(|| anyhow!("Asset id '{asset_id}' is missing from the display registry"))?;
        let points = self.tracker_client.history(asset_id, days).await?;
        let title = format!("{} Price History (Last {days} Days)", info.display_name);
        Ok(self.chart_builder.build(&title, points).await)
    }

    async fn convert(
        &self,
        amount_input: Option<&str>,
        source_asset: &str,
        destination: &str,
    ) -> std::result::Result<String, ConversionError> {
        let amount = CrossRateCalculator::<T>::coerce_amount(amount_input);
        let request = ConversionRequest::new(amount, source_asset, destination);
        let converted = self.calculator.convert(&request).await?;
        Ok(format::converted_amount(converted))
    }
}
