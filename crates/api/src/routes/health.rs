use axum::extract::State;
use axum::{routing::get, Json, Router};
use sentinel_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `healthy` or `degraded`.
    pub status: &'static str,
    /// Server time at the moment of the check.
    pub timestamp: Timestamp,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = sentinel_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now(),
        db_healthy,
    })
}

/// Mount the health check route at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
