use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health. Always answers 200; a database outage shows up as
/// `"degraded"` in the body rather than as a failed request.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = chitrashala_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the server root, outside the /api prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
