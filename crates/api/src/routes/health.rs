use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether every table file is readable and well-formed.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let tasks = taskdesk_db::health_check(&state.tasks).await;
    let users = taskdesk_db::health_check(&state.users).await;

    for err in [&tasks, &users].into_iter().filter_map(|r| r.as_ref().err()) {
        tracing::warn!(error = %err, "Store health check failed");
    }
    let store_healthy = tasks.is_ok() && users.is_ok();

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
