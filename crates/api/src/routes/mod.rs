pub mod admin;
pub mod assets;
pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /assets                                          mint (POST)
/// /assets/last-id                                  most recent id
/// /assets/{id}                                     asset record
/// /assets/{id}/owner                               owner
/// /assets/{id}/token-uri                           content reference
/// /assets/{id}/transfer                            transfer (POST)
/// /assets/{id}/versions                            version list
/// /assets/{id}/versions/{version}                  register (PUT), get
/// /assets/{id}/licenses/{licensee}                 grant (PUT), revoke (DELETE), get
/// /assets/{id}/category                            set (PUT), get
/// /assets/{id}/collaborators/{collaborator}        add (PUT), get
/// /assets/{id}/status                              set (PUT), get
/// /assets/{id}/revenue-shares                      per-asset total
/// /assets/{id}/revenue-shares/{participant}        set (PUT), get
///
/// /admin/control                                   pause flag + admin
/// /admin/pause                                     pause (POST, admin only)
/// /admin/unpause                                   unpause (POST, admin only)
/// /admin/admin                                     hand off admin (PUT, admin only)
///
/// /events                                          recent journal entries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/admin", admin::router())
        .nest("/events", events::router())
}
