//! Endpoint handlers.
//!
//! Each handler pulls a fresh flight board, runs one aggregation over it and
//! returns the result as JSON. Nothing is kept between requests.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::flights::aggregate;
use crate::http::response::{
    ApiResult, CityResponse, CountResponse, GetawayResponse, HealthResponse,
};
use crate::http::server::AppState;

/// `GET /`: the `result.records` array exactly as the upstream sent it.
pub async fn list_flights(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let board = state.fetcher.fetch_board().await?;
    Ok(Json(board.records))
}

/// `GET /flights/count`
pub async fn count_all(State(state): State<AppState>) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_all(&flights)))
}

/// `GET /flights/inbound/count`
pub async fn count_inbound(State(state): State<AppState>) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_inbound(&flights)))
}

/// `GET /flights/outbound/count`
pub async fn count_outbound(State(state): State<AppState>) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_outbound(&flights)))
}

/// `GET /flights/count/{country}`
pub async fn count_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_by_country(&flights, &country)))
}

/// `GET /flights/outbound/count/{country}`
pub async fn count_outbound_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_outbound_by_country(&flights, &country)))
}

/// `GET /flights/inbound/count/{country}`
pub async fn count_inbound_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_inbound_by_country(&flights, &country)))
}

/// `GET /flights/delayed/count`
pub async fn count_delayed(State(state): State<AppState>) -> ApiResult<CountResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(count(aggregate::count_delayed(&flights)))
}

/// `GET /flights/most-popular`
pub async fn most_popular(State(state): State<AppState>) -> ApiResult<CityResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    Ok(Json(CityResponse {
        city: aggregate::most_popular_destination(&flights),
    }))
}

/// `GET /flights/quick-getaway`
pub async fn quick_getaway(State(state): State<AppState>) -> ApiResult<GetawayResponse> {
    let flights = state.fetcher.fetch_board().await?.flights;
    let pair = aggregate::quick_getaway(&flights);
    if pair.is_none() {
        tracing::debug!(records = flights.len(), "No quick getaway pair on the board");
    }
    Ok(Json(GetawayResponse::from_pair(pair)))
}

/// `GET /health`: liveness only, does not touch the upstream.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
    })
}

fn count(count: usize) -> Json<CountResponse> {
    Json(CountResponse { count })
}
