// HTTP request handlers - JSON endpoints consumed by the chart sink.
// The telemetry/alert/chart endpoints always answer, regardless of the
// weather path's state.
use crate::application::aggregator;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current fleet snapshot, one record per vehicle in registration order.
/// Feeds the per-vehicle tiles (driver, cargo, speed, coordinates).
pub async fn fleet_snapshot(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let board = state.fleet_service.board().await;
    Json(board.vehicles)
}

/// The active speed alert, or null when the feed is idle.
pub async fn current_alert(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.fleet_service.current_alert())
}

/// Latest-tick speed series (live gauge, rebuilt wholesale every tick).
pub async fn speed_chart(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let board = state.fleet_service.board().await;
    Json(board.speed_series)
}

/// Static payload-by-vehicle series.
pub async fn payload_chart(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let board = state.fleet_service.board().await;
    Json(aggregator::payload_series(&board.vehicles))
}

/// Normalized weather view, or the status message that replaced it.
pub async fn weather(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.weather_service.view().await)
}
