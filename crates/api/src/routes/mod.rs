pub mod auth;
pub mod billing;
pub mod chat;
pub mod health;
pub mod letters;
pub mod platforms;
pub mod requests;
pub mod user_platforms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               send magic link (public)
/// /auth/verify                              redeem magic link (public)
/// /auth/refresh                             rotate refresh token (public)
/// /auth/logout                              revoke sessions (auth)
/// /auth/me                                  get, update profile (auth)
///
/// /platforms                                list catalog (?category=) (public)
/// /platforms/{id_or_slug}                   platform detail + GDPR contact (public)
/// /platforms/{id_or_slug}/gdpr-contact      curated contact only (public)
///
/// /requests                                 list, create (auth)
/// /requests/{id}                            get, update, delete (auth)
/// /requests/{id}/complete                   complete all steps (POST)
/// /requests/{id}/steps/{step_id}/complete   complete one step (POST)
/// /requests/{id}/steps/{step_id}/uncomplete un-complete one step (POST)
///
/// /user-platforms                           list, track (auth)
/// /user-platforms/{id}                      update, untrack (auth)
///
/// /letters/generate                         render GDPR letter (POST, auth)
/// /letters/send                             render + email letter (POST, auth)
///
/// /billing/subscription                     current subscription (auth)
/// /billing/checkout                         Stripe checkout URL (POST, auth)
/// /billing/portal                           Stripe portal URL (POST, auth)
/// /billing/webhook                          Stripe webhook (POST, signed)
///
/// /chat                                     send + stream reply (POST) (auth)
/// /chat/messages                            history, last 50 (GET) (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/platforms", platforms::router())
        .nest("/requests", requests::router())
        .nest("/user-platforms", user_platforms::router())
        .nest("/letters", letters::router())
        .nest("/billing", billing::router())
        .nest("/chat", chat::router())
}
