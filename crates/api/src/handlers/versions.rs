//! Handlers for asset version history.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use trackvault_core::types::VersionNumber;
use trackvault_core::AssetId;
use trackvault_events::event_types;

use super::{event, execute, read};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterVersion {
    pub content_ref: String,
    #[serde(default)]
    pub notes: String,
}

/// PUT /api/v1/assets/{id}/versions/{version}
///
/// Record or overwrite one version. Owner only.
pub async fn register_version(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path((id, version)): Path<(AssetId, VersionNumber)>,
    AppJson(input): AppJson<RegisterVersion>,
) -> AppResult<impl IntoResponse> {
    let (record, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.register_version(ctx, id, version, input.content_ref, input.notes)?;
            reg.get_version(id, version).cloned()
        },
        |record, ctx| {
            event(ctx, event_types::VERSION_REGISTERED)
                .with_asset(id)
                .with_payload(json!({ "version": version, "content_ref": record.content_ref }))
        },
    )
    .await?;

    tracing::info!(asset_id = id, version, sequence = ctx.sequence, "Version registered");

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/assets/{id}/versions/{version}
pub async fn get_version(
    State(state): State<AppState>,
    Path((id, version)): Path<(AssetId, VersionNumber)>,
) -> AppResult<impl IntoResponse> {
    let record = read(&state, |reg| reg.get_version(id, version).cloned()).await?;
    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/assets/{id}/versions
///
/// All versions of the asset, ordered by version number.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let versions = read(&state, |reg| {
        reg.list_versions(id)
            .map(|vs| vs.into_iter().cloned().collect::<Vec<_>>())
    })
    .await?;
    Ok(Json(DataResponse { data: versions }))
}
