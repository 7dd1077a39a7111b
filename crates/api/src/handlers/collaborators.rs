//! Handlers for asset collaborators.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use trackvault_core::{AssetId, Principal};
use trackvault_events::event_types;

use super::{event, execute, read};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCollaborator {
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// PUT /api/v1/assets/{id}/collaborators/{collaborator}
///
/// Add or replace a collaborator entry. Owner only.
pub async fn add_collaborator(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path((id, collaborator)): Path<(AssetId, String)>,
    AppJson(input): AppJson<AddCollaborator>,
) -> AppResult<impl IntoResponse> {
    let collaborator = Principal::new(collaborator);

    let (record, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.add_collaborator(ctx, id, collaborator.clone(), input.role, input.permissions)?;
            reg.get_collaborator(id, &collaborator).cloned()
        },
        |record, ctx| {
            event(ctx, event_types::COLLABORATOR_ADDED)
                .with_asset(id)
                .with_payload(json!({ "collaborator": collaborator, "role": record.role }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = id,
        collaborator = %collaborator,
        role = %record.role,
        sequence = ctx.sequence,
        "Collaborator added",
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/assets/{id}/collaborators/{collaborator}
pub async fn get_collaborator(
    State(state): State<AppState>,
    Path((id, collaborator)): Path<(AssetId, String)>,
) -> AppResult<impl IntoResponse> {
    let collaborator = Principal::new(collaborator);
    let record = read(&state, |reg| reg.get_collaborator(id, &collaborator).cloned()).await?;
    Ok(Json(DataResponse { data: record }))
}
