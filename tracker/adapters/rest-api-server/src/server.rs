use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::error;

use tracker_core_api::TrackerApi;
use tracker_rest_api::dto::{AssetPriceDto, ExchangeRateDto, PriceHistoryDto};
use tracker_rest_api::endpoints::{GET_EXCHANGE_RATE, GET_PRICE, GET_PRICE_HISTORY};
use tracker_rest_api::path_queries::{ExchangeRateQuery, HistoryQuery, PricesQuery};

pub async fn run(port: u16, tracker: impl TrackerApi) {
    let tracker = Arc::new(tracker);
    let router = Router::new()
        .route(GET_PRICE, get(get_price))
        .route(GET_PRICE_HISTORY, get(get_price_history))
        .route(GET_EXCHANGE_RATE, get(get_exchange_rate))
        .with_state(tracker);

    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

async fn get_price(
    Query(query_params): Query<PricesQuery>,
    State(tracker): State<Arc<dyn TrackerApi>>,
) -> Result<Json<HashMap<String, AssetPriceDto>>, (StatusCode, String)> {
    let ids: Vec<String> = query_params
        .ids
        .map(|ids| {
            ids.split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let quotes = tracker.prices(&ids).await.map_err(|err| {
        error!("Error fetching prices: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching prices: {err}"),
        )
    })?;
    let result = quotes
        .into_iter()
        .map(|(asset_id, quote)| (asset_id, AssetPriceDto::from(quote)))
        .collect();
    Ok(Json(result))
}

async fn get_price_history(
    Path(asset_id): Path<String>,
    Query(query_params): Query<HistoryQuery>,
    State(tracker): State<Arc<dyn TrackerApi>>,
) -> Result<Json<PriceHistoryDto>, (StatusCode, String)> {
    let points = tracker
        .history(&asset_id, query_params.days)
        .await
        .map_err(|err| {
            error!("Error fetching history: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching history: {err}"),
            )
        })?;
    Ok(Json(PriceHistoryDto::from(points)))
}

async fn get_exchange_rate(
    Query(query_params): Query<ExchangeRateQuery>,
    State(tracker): State<Arc<dyn TrackerApi>>,
) -> Result<Json<ExchangeRateDto>, (StatusCode, String)> {
    let rate = tracker
        .exchange_rate(&query_params.base, &query_params.target)
        .await
        .map_err(|err| {
            error!("Error fetching exchange rate: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching exchange rate: {err}"),
            )
        })?;
    Ok(Json(ExchangeRateDto { rate }))
}
