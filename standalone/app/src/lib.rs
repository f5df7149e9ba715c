use std::thread;

use tracing::info;

pub fn run() {
    info!("======================================");
    info!("Price tracker services running locally");
    info!("======================================");
    thread::spawn(run_tracker);
    thread::spawn(run_dashboard);
}

#[tokio::main]
async fn run_tracker() {
    tracker_app::run().await;
}

#[tokio::main]
async fn run_dashboard() {
    dashboard_app::run().await;
}
