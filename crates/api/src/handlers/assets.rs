//! Handlers for asset lifecycle: mint, transfer and asset reads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trackvault_core::{AssetId, Principal};
use trackvault_events::event_types;
use validator::Validate;

use super::{event, execute, read};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MintAsset {
    pub content_ref: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransferAsset {
    #[validate(length(min = 1))]
    pub from: String,
    #[validate(length(min = 1))]
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct OwnerView {
    pub asset_id: AssetId,
    pub owner: Principal,
}

#[derive(Debug, Serialize)]
pub struct TokenUriView {
    pub asset_id: AssetId,
    pub content_ref: String,
}

#[derive(Debug, Serialize)]
pub struct LastIdView {
    pub last_id: AssetId,
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/assets
///
/// Mint a new asset owned by the caller.
pub async fn mint_asset(
    Caller(caller): Caller,
    State(state): State<AppState>,
    AppJson(input): AppJson<MintAsset>,
) -> AppResult<impl IntoResponse> {
    let (asset, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            let id = reg.mint(ctx, input.content_ref, input.title, input.description)?;
            reg.get_asset(id).cloned()
        },
        |asset, ctx| {
            event(ctx, event_types::ASSET_MINTED)
                .with_asset(asset.id)
                .with_payload(json!({ "content_ref": asset.content_ref, "title": asset.title }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = asset.id,
        owner = %asset.owner,
        sequence = ctx.sequence,
        "Asset minted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// POST /api/v1/assets/{id}/transfer
///
/// Move an asset from `from` to `to`. The caller must be `from`.
pub async fn transfer_asset(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
    AppJson(input): AppJson<TransferAsset>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let from = Principal::new(input.from);
    let to = Principal::new(input.to);

    let (asset, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.transfer(ctx, id, from.clone(), to.clone())?;
            reg.get_asset(id).cloned()
        },
        |_, ctx| {
            event(ctx, event_types::ASSET_TRANSFERRED)
                .with_asset(id)
                .with_payload(json!({ "from": from, "to": to }))
        },
    )
    .await?;

    tracing::info!(asset_id = id, from = %from, to = %to, sequence = ctx.sequence, "Asset transferred");

    Ok(Json(DataResponse { data: asset }))
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let asset = read(&state, |reg| reg.get_asset(id).cloned()).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// GET /api/v1/assets/{id}/owner
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let owner = read(&state, |reg| reg.get_owner(id).cloned()).await?;
    Ok(Json(DataResponse {
        data: OwnerView {
            asset_id: id,
            owner,
        },
    }))
}

/// GET /api/v1/assets/{id}/token-uri
pub async fn get_token_uri(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let content_ref = read(&state, |reg| reg.get_token_uri(id).map(str::to_owned)).await?;
    Ok(Json(DataResponse {
        data: TokenUriView {
            asset_id: id,
            content_ref,
        },
    }))
}

/// GET /api/v1/assets/last-id
pub async fn get_last_id(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let last_id = read(&state, |reg| Ok(reg.get_last_id())).await?;
    Ok(Json(DataResponse {
        data: LastIdView { last_id },
    }))
}
