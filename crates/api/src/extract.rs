//! Request extractors with rejections mapped onto [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor.
///
/// Same as [`axum::Json`] except that a missing content type, unparseable
/// body or wrongly typed field is reported as a `400 BAD_REQUEST` error body
/// instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
