//! Handler for the recent-events journal.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/events?limit=
///
/// Newest journal entries, oldest first.
pub async fn list_recent_events(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let events = state.journal.recent(params.clamped()).await;
    Ok(Json(DataResponse { data: events }))
}
