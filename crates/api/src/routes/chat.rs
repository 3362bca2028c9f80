//! Route definitions for the `/chat` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat` (all require auth).
///
/// ```text
/// GET  /messages   -> history       (last 50 messages, oldest first)
/// POST /           -> send_message  (streams the reply as text/plain)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(chat::send_message))
        .route("/messages", get(chat::history))
}
