use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, warn};

use dashboard_core_api::DashboardApi;
use dashboard_rest_api::dto::ConversionDto;
use dashboard_rest_api::endpoints::{GET_CHART, GET_CONVERT, GET_DASHBOARD};
use dashboard_rest_api::path_queries::{ChartQuery, ConvertQuery};

use crate::render;

pub async fn run(port: u16, dashboard: Arc<impl DashboardApi>) {
    let dashboard: Arc<dyn DashboardApi> = dashboard;
    let router = Router::new()
        .route(GET_DASHBOARD, get(get_dashboard))
        .route(GET_CHART, get(get_chart))
        .route(GET_CONVERT, get(get_convert))
        .with_state(dashboard);

    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

/// Full page render. Every request runs one refresh cycle, so the manual
/// refresh button is just a reload of this route.
async fn get_dashboard(State(dashboard): State<Arc<dyn DashboardApi>>) -> Html<String> {
    let snapshot = dashboard.refresh().await;
    Html(render::page(&snapshot))
}

async fn get_chart(
    State(dashboard): State<Arc<dyn DashboardApi>>,
    Path(asset_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Html<String> {
    let chart_html = dashboard
        .history_chart_html(&asset_id, query.days)
        .await
        .map_err(|err| error!("Error during history chart building: '{err}'"))
        .unwrap_or("<p>Error during chart building</p>".to_string());
    Html(chart_html)
}

async fn get_convert(
    State(dashboard): State<Arc<dyn DashboardApi>>,
    Query(query): Query<ConvertQuery>,
) -> Json<ConversionDto> {
    let result = dashboard
        .convert(query.amount.as_deref(), &query.send, &query.receive)
        .await;
    match result {
        Ok(amount) => Json(ConversionDto::result(amount)),
        Err(err) => {
            warn!("Conversion '{}' -> '{}' failed: {err}", query.send, query.receive);
            Json(ConversionDto::error(err.to_string()))
        }
    }
}
