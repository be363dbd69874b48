use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    intraday_active: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        intraday_active: state.clock.is_intraday_active(chrono::Utc::now()),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
