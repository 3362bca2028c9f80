//! Route definitions for the `/requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/requests` (all require auth).
///
/// ```text
/// GET    /                                  -> list_requests
/// POST   /                                  -> create_request
/// GET    /{id}                              -> get_request
/// PATCH  /{id}                              -> update_request
/// DELETE /{id}                              -> delete_request
/// POST   /{id}/complete                     -> complete_request
/// POST   /{id}/steps/{step_id}/complete     -> complete_step
/// POST   /{id}/steps/{step_id}/uncomplete   -> uncomplete_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list_requests).post(requests::create_request))
        .route(
            "/{id}",
            get(requests::get_request)
                .patch(requests::update_request)
                .delete(requests::delete_request),
        )
        .route("/{id}/complete", post(requests::complete_request))
        .route("/{id}/steps/{step_id}/complete", post(requests::complete_step))
        .route(
            "/{id}/steps/{step_id}/uncomplete",
            post(requests::uncomplete_step),
        )
}
