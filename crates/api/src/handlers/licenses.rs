//! Handlers for asset licenses.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use trackvault_core::records::LicenseRecord;
use trackvault_core::{AssetId, Principal, Sequence};
use trackvault_events::event_types;

use super::{event, execute};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GrantLicense {
    /// Number of sequence steps the license stays valid for.
    pub duration: Sequence,
    #[serde(default)]
    pub terms: String,
}

/// A license together with its validity at the current sequence.
#[derive(Debug, Serialize)]
pub struct LicenseView {
    #[serde(flatten)]
    pub license: LicenseRecord,
    pub valid: bool,
}

/// PUT /api/v1/assets/{id}/licenses/{licensee}
///
/// Grant (or re-grant) a license. Owner only.
pub async fn grant_license(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path((id, licensee)): Path<(AssetId, String)>,
    AppJson(input): AppJson<GrantLicense>,
) -> AppResult<impl IntoResponse> {
    let licensee = Principal::new(licensee);

    let (license, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.grant_license(ctx, id, licensee.clone(), input.duration, input.terms)?;
            reg.get_license(id, &licensee).cloned()
        },
        |license, ctx| {
            event(ctx, event_types::LICENSE_GRANTED)
                .with_asset(id)
                .with_payload(json!({ "licensee": licensee, "expires_at": license.expires_at }))
        },
    )
    .await?;

    tracing::info!(
        asset_id = id,
        licensee = %licensee,
        expires_at = license.expires_at,
        sequence = ctx.sequence,
        "License granted",
    );

    let valid = license.is_valid_at(ctx.sequence);
    Ok(Json(DataResponse {
        data: LicenseView { license, valid },
    }))
}

/// DELETE /api/v1/assets/{id}/licenses/{licensee}
///
/// Deactivate a license. Owner only.
pub async fn revoke_license(
    Caller(caller): Caller,
    State(state): State<AppState>,
    Path((id, licensee)): Path<(AssetId, String)>,
) -> AppResult<impl IntoResponse> {
    let licensee = Principal::new(licensee);

    let (license, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.revoke_license(ctx, id, licensee.clone())?;
            reg.get_license(id, &licensee).cloned()
        },
        |_, ctx| {
            event(ctx, event_types::LICENSE_REVOKED)
                .with_asset(id)
                .with_payload(json!({ "licensee": licensee }))
        },
    )
    .await?;

    tracing::info!(asset_id = id, licensee = %licensee, sequence = ctx.sequence, "License revoked");

    Ok(Json(DataResponse {
        data: LicenseView {
            license,
            valid: false,
        },
    }))
}

/// GET /api/v1/assets/{id}/licenses/{licensee}
pub async fn get_license(
    State(state): State<AppState>,
    Path((id, licensee)): Path<(AssetId, String)>,
) -> AppResult<impl IntoResponse> {
    let licensee = Principal::new(licensee);
    let sequencer = state.sequencer.lock().await;
    let now = sequencer.current_sequence();
    let registry = sequencer.registry();
    let license = registry.get_license(id, &licensee)?.clone();
    let valid = registry.is_license_valid(id, &licensee, now)?;
    drop(sequencer);

    Ok(Json(DataResponse {
        data: LicenseView { license, valid },
    }))
}
