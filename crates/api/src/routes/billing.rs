//! Route definitions for the `/billing` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// Routes mounted at `/billing`.
///
/// ```text
/// GET  /subscription  -> get_subscription  (requires auth)
/// POST /checkout      -> create_checkout   (requires auth)
/// POST /portal        -> create_portal     (requires auth)
/// POST /webhook       -> webhook           (Stripe-signed, no auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscription", get(billing::get_subscription))
        .route("/checkout", post(billing::create_checkout))
        .route("/portal", post(billing::create_portal))
        .route("/webhook", post(billing::webhook))
}
