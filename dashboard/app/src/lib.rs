use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use dashboard_charming_builder::CharmingBuilder;
use dashboard_config::CONFIG;
use dashboard_core::{poller, Dashboard};
use tracker_rest_client::TrackerRestClient;

pub async fn run() {
    info!("+ dashboard running...");
    let tracker_client = TrackerRestClient::new(&CONFIG.tracker.url);
    let dashboard = Arc::new(Dashboard::new(tracker_client, CharmingBuilder));
    poller::spawn(
        Arc::clone(&dashboard),
        Duration::from_secs(CONFIG.refresh.seconds),
    );
    dashboard_rest_api_server::run(CONFIG.application.port, dashboard).await;
}
