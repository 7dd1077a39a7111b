//! Handlers for revenue shares.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
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
pub struct SetRevenueShare {
    pub percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct ShareTotalView {
    pub asset_id: AssetId,
    pub total_percentage: u32,
}

/// PUT /api/v1/assets/{id}/revenue-shares/{participant}
///
/// Set a participant's share. Owner only. Resets the received total.
pub async fn set_revenue_share(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path((id, participant)): Path<(AssetId, String)>,
    AppJson(input): AppJson<SetRevenueShare>,
) -> AppResult<impl IntoResponse> {
    let participant = Principal::new(participant);

    let (share, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.set_revenue_share(ctx, id, participant.clone(), input.percentage)?;
            reg.get_revenue_share(id, &participant).cloned()
        },
        |share, ctx| {
            event(ctx, event_types::REVENUE_SHARE_SET)
                .with_asset(id)
                .with_payload(json!({ "participant": participant, "percentage": share.percentage }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = id,
        participant = %participant,
        percentage = share.percentage,
        sequence = ctx.sequence,
        "Revenue share set",
    );

    Ok(Json(DataResponse { data: share }))
}

/// GET /api/v1/assets/{id}/revenue-shares/{participant}
pub async fn get_revenue_share(
    State(state): State<AppState>,
    Path((id, participant)): Path<(AssetId, String)>,
) -> AppResult<impl IntoResponse> {
    let participant = Principal::new(participant);
    let share = read(&state, |reg| reg.get_revenue_share(id, &participant).cloned()).await?;
    Ok(Json(DataResponse { data: share }))
}

/// GET /api/v1/assets/{id}/revenue-shares
///
/// Sum of all participants' percentages on the asset.
pub async fn get_share_total(
    State(state): State<AppState>,
    Path(id): Path<AssetId>,
) -> AppResult<impl IntoResponse> {
    let total_percentage = read(&state, |reg| reg.total_share_percentage(id)).await?;
    Ok(Json(DataResponse {
        data: ShareTotalView {
            asset_id: id,
            total_percentage,
        },
    }))
}
