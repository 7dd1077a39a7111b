//! Route definitions for assets and their side-tables.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{assets, catalog, collaborators, licenses, revenue, versions};
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// POST   /                                   -> mint_asset
/// GET    /last-id                            -> get_last_id
/// GET    /{id}                               -> get_asset
/// GET    /{id}/owner                         -> get_owner
/// GET    /{id}/token-uri                     -> get_token_uri
/// POST   /{id}/transfer                      -> transfer_asset
/// GET    /{id}/versions                      -> list_versions
/// PUT    /{id}/versions/{version}            -> register_version
/// GET    /{id}/versions/{version}            -> get_version
/// PUT    /{id}/licenses/{licensee}           -> grant_license
/// DELETE /{id}/licenses/{licensee}           -> revoke_license
/// GET    /{id}/licenses/{licensee}           -> get_license
/// PUT    /{id}/category                      -> set_category
/// GET    /{id}/category                      -> get_category
/// PUT    /{id}/collaborators/{collaborator}  -> add_collaborator
/// GET    /{id}/collaborators/{collaborator}  -> get_collaborator
/// PUT    /{id}/status                        -> set_status
/// GET    /{id}/status                        -> get_status
/// GET    /{id}/revenue-shares                -> get_share_total
/// PUT    /{id}/revenue-shares/{participant}  -> set_revenue_share
/// GET    /{id}/revenue-shares/{participant}  -> get_revenue_share
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assets::mint_asset))
        .route("/last-id", get(assets::get_last_id))
        .route("/{id}", get(assets::get_asset))
        .route("/{id}/owner", get(assets::get_owner))
        .route("/{id}/token-uri", get(assets::get_token_uri))
        .route("/{id}/transfer", post(assets::transfer_asset))
        .route("/{id}/versions", get(versions::list_versions))
        .route(
            "/{id}/versions/{version}",
            put(versions::register_version).get(versions::get_version),
        )
        .route(
            "/{id}/licenses/{licensee}",
            put(licenses::grant_license)
                .delete(licenses::revoke_license)
                .get(licenses::get_license),
        )
        .route(
            "/{id}/category",
            put(catalog::set_category).get(catalog::get_category),
        )
        .route(
            "/{id}/collaborators/{collaborator}",
            put(collaborators::add_collaborator).get(collaborators::get_collaborator),
        )
        .route(
            "/{id}/status",
            put(catalog::set_status).get(catalog::get_status),
        )
        .route("/{id}/revenue-shares", get(revenue::get_share_total))
        .route(
            "/{id}/revenue-shares/{participant}",
            put(revenue::set_revenue_share).get(revenue::get_revenue_share),
        )
}
