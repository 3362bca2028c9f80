//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login     -> login       (public; sends magic link)
/// POST /verify    -> verify      (public; consumes magic link)
/// POST /refresh   -> refresh     (public; rotates refresh token)
/// POST /logout    -> logout      (requires auth)
/// GET  /me        -> me          (requires auth)
/// PATCH /me       -> update_me   (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/verify", post(auth::verify))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me).patch(auth::update_me))
}
