//! Route definitions for the `/user-platforms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_platforms;
use crate::state::AppState;

/// Routes mounted at `/user-platforms` (all require auth).
///
/// ```text
/// GET    /        -> list_user_platforms
/// POST   /        -> track_platform
/// PATCH  /{id}    -> update_user_platform
/// DELETE /{id}    -> untrack_platform
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_platforms::list_user_platforms).post(user_platforms::track_platform),
        )
        .route(
            "/{id}",
            axum::routing::patch(user_platforms::update_user_platform)
                .delete(user_platforms::untrack_platform),
        )
}
