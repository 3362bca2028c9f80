//! Route definitions for the `/letters` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::letters;
use crate::state::AppState;

/// Routes mounted at `/letters` (all require auth).
///
/// ```text
/// POST /generate  -> generate  (render letter, no side effects)
/// POST /send      -> send      (render + email to privacy contact)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(letters::generate))
        .route("/send", post(letters::send))
}
