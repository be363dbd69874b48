//! Market session endpoints.

use axum::{extract::State, routing::get, Json, Router};

use crate::types::MarketStatus;
use crate::AppState;

/// Create the market router.
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}

/// Current session status and suggested refresh interval.
async fn get_status(State(state): State<AppState>) -> Json<MarketStatus> {
    Json(state.clock.status_at(chrono::Utc::now(), &state.config))
}
