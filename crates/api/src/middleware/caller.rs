//! Invoking-identity extractor for Axum handlers.
//!
//! Identity management lives outside the registry: an upstream gateway
//! authenticates the caller and forwards the resulting identity in the
//! `x-caller-identity` header. The registry trusts it as given.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trackvault_core::{Principal, RegistryError};

use crate::error::AppError;

/// Header carrying the invoking identity.
pub const CALLER_HEADER: &str = "x-caller-identity";

/// The identity invoking the current request.
///
/// ```ignore
/// async fn my_handler(Caller(caller): Caller) -> AppResult<Json<()>> {
///     tracing::info!(caller = %caller, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Caller(pub Principal);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Registry(RegistryError::NotAuthorized(format!(
                    "Missing {CALLER_HEADER} header"
                )))
            })?;

        Ok(Caller(Principal::new(identity)))
    }
}
