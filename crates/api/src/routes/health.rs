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
    /// Whether the registry currently rejects mutations.
    pub paused: bool,
    /// Identifier of the most recently minted asset.
    pub last_id: u64,
}

/// GET /health -- returns service and registry health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let sequencer = state.sequencer.lock().await;
    let registry = sequencer.registry();

    Json(HealthResponse {
        status: if registry.is_paused() { "paused" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        paused: registry.is_paused(),
        last_id: registry.get_last_id(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
