use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use dashboard_core_api::DashboardApi;

/// Background refresh at a fixed interval. The timer and on-demand requests
/// funnel into the same idempotent `refresh`, so a tick is equivalent to a
/// manual reload.
pub fn spawn<D: DashboardApi>(dashboard: Arc<D>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let snapshot = dashboard.refresh().await;
            match snapshot.warning {
                None => debug!(
                    "Scheduled refresh rebuilt {} asset cards",
                    snapshot.view.cards.len()
                ),
                Some(warning) => warn!("Scheduled refresh degraded: {warning}"),
            }
        }
    });
}
