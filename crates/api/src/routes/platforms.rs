//! Route definitions for the `/platforms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::platforms;
use crate::state::AppState;

/// Routes mounted at `/platforms` (public).
///
/// ```text
/// GET /                             -> list_platforms  (?category=)
/// GET /{id_or_slug}                 -> get_platform
/// GET /{id_or_slug}/gdpr-contact    -> get_gdpr_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(platforms::list_platforms))
        .route("/{id_or_slug}", get(platforms::get_platform))
        .route("/{id_or_slug}/gdpr-contact", get(platforms::get_gdpr_contact))
}
