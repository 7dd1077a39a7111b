//! Handlers for the registry control plane: pause, unpause, admin handoff.
//!
//! None of these are blocked by the pause flag.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use trackvault_core::Principal;
use trackvault_events::event_types;
use validator::Validate;

use super::{event, execute, read};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::caller::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SetAdmin {
    #[validate(length(min = 1))]
    pub new_admin: String,
}

/// GET /api/v1/admin/control
pub async fn get_control(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let control = read(&state, |reg| Ok(reg.control().clone())).await?;
    Ok(Json(DataResponse { data: control }))
}

/// POST /api/v1/admin/pause
pub async fn pause(
    Caller(caller): Caller,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (control, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.pause(ctx)?;
            Ok(reg.control().clone())
        },
        |_, ctx| event(ctx, event_types::REGISTRY_PAUSED),
    )
    .await?;

    tracing::warn!(admin = %ctx.caller, sequence = ctx.sequence, "Registry paused");

    Ok(Json(DataResponse { data: control }))
}

/// POST /api/v1/admin/unpause
pub async fn unpause(
    Caller(caller): Caller,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (control, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.unpause(ctx)?;
            Ok(reg.control().clone())
        },
        |_, ctx| event(ctx, event_types::REGISTRY_UNPAUSED),
    )
    .await?;

    tracing::info!(admin = %ctx.caller, sequence = ctx.sequence, "Registry unpaused");

    Ok(Json(DataResponse { data: control }))
}

/// PUT /api/v1/admin/admin
///
/// Replace the administrator. Takes effect immediately.
pub async fn set_admin(
    Caller(caller): Caller,
    State(state): State<AppState>,
    AppJson(input): AppJson<SetAdmin>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let new_admin = Principal::new(input.new_admin);

    let (control, ctx) = execute(
        &state,
        caller,
        |reg, ctx| {
            reg.set_admin(ctx, new_admin.clone())?;
            Ok(reg.control().clone())
        },
        |_, ctx| {
            event(ctx, event_types::REGISTRY_ADMIN_CHANGED)
                .with_payload(json!({ "previous": ctx.caller, "new_admin": new_admin }))
        },
    )
    .await?;

    tracing::warn!(
        previous = %ctx.caller,
        new_admin = %new_admin,
        sequence = ctx.sequence,
        "Registry administrator changed",
    );

    Ok(Json(DataResponse { data: control }))
}
