//! Route definitions for the registry control plane.
//!
//! All routes are mounted under `/admin`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Control-plane routes mounted at `/admin`.
///
/// ```text
/// GET  /control   -> get_control
/// POST /pause     -> pause
/// POST /unpause   -> unpause
/// PUT  /admin     -> set_admin
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/control", get(admin::get_control))
        .route("/pause", post(admin::pause))
        .route("/unpause", post(admin::unpause))
        .route("/admin", put(admin::set_admin))
}
