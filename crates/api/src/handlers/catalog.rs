//! Handlers for the per-asset category and status records.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use trackvault_core::AssetId;
use trackvault_events::event_types;

use super::{event, execute, read};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetCategory {
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: String,
    pub visible: bool,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// PUT /api/v1/assets/{id}/category
///
/// Replace the category and tag list. Owner only.
pub async fn set_category(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
    AppJson(input): AppJson<SetCategory>,
) -> AppResult<impl IntoResponse> {
    let (record, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.set_category(ctx, id, input.category, input.tags)?;
            reg.get_category(id).cloned()
        },
        |record, ctx| {
            event(ctx, event_types::CATEGORY_SET)
                .with_asset(id)
                .with_payload(json!({ "category": record.category, "tags": record.tags }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = id,
        category = %record.category,
        tag_count = record.tags.len(),
        sequence = ctx.sequence,
        "Category set",
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/assets/{id}/category
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let record = read(&state, |reg| reg.get_category(id).cloned()).await?;
    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// PUT /api/v1/assets/{id}/status
///
/// Replace the status label and visibility. Owner only.
pub async fn set_status(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
    AppJson(input): AppJson<SetStatus>,
) -> AppResult<impl IntoResponse> {
    let (record, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.set_status(ctx, id, input.status, input.visible)?;
            reg.get_status(id).cloned()
        },
        |record, ctx| {
            event(ctx, event_types::STATUS_SET)
                .with_asset(id)
                .with_payload(json!({ "status": record.status, "visible": record.visible }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = id,
        status = %record.status,
        visible = record.visible,
        sequence = ctx.sequence,
        "Status set",
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/assets/{id}/status
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let record = read(&state, |reg| reg.get_status(id).cloned()).await?;
    Ok(Json(DataResponse { data: record }))
}
