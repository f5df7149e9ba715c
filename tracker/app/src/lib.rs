use tracing::info;

use domain_model::AssetRegistry;
use tracker_coingecko_upstream::CoinGeckoUpstream;
use tracker_config::CONFIG;
use tracker_core::Tracker;

pub async fn run() {
    info!("+ tracker running...");
    let coingecko = &CONFIG.upstream.coingecko;
    let upstream_client = CoinGeckoUpstream::new(&coingecko.http.url, coingecko.auth.key());
    let tracker = Tracker::new(upstream_client, AssetRegistry::tracked());
    tracker_rest_api_server::run(CONFIG.application.port, tracker).await;
}
