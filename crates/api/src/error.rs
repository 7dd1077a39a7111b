use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trackvault_core::RegistryError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RegistryError`] for registry rejections and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A rejection from the registry state machine.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// HTTP status for each registry rejection.
fn registry_status(err: &RegistryError) -> StatusCode {
    match err {
        RegistryError::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
        RegistryError::NotOwner { .. } => StatusCode::FORBIDDEN,
        RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
        RegistryError::AlreadyRegistered(_) => StatusCode::CONFLICT,
        RegistryError::Paused => StatusCode::LOCKED,
        RegistryError::InvalidParam { .. }
        | RegistryError::MetadataTooLong { .. }
        | RegistryError::InvalidShare(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, reason, message) = match &self {
            AppError::Registry(err) => (
                registry_status(err),
                err.tag(),
                Some(err.code()),
                err.to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", None, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    None,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
            "reason": reason,
        });

        (status, axum::Json(body)).into_response()
    }
}
