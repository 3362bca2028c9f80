//! HTTP-level integration tests for the magic-link auth flow.
//!
//! Email delivery is disabled in the test harness, so tests seed login
//! tokens directly through the repository and exercise the verify,
//! refresh, logout, and profile endpoints over HTTP.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get_auth, patch_json_auth, post_json, post_json_auth};
use slettmeg_core::tokens;
use slettmeg_db::repositories::{LoginTokenRepo, SubscriptionRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Store a login token for `email` and return the plaintext token,
/// standing in for the email the mailer would have sent.
async fn seed_login_token(pool: &PgPool, email: &str) -> String {
    let token = tokens::generate_token();
    let expires_at = Utc::now() + Duration::hours(24);
    LoginTokenRepo::create(pool, email, &token.hash, expires_at)
        .await
        .expect("token creation should succeed");
    token.plaintext
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Without a configured mailer the login endpoint answers 503.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_without_mailer_returns_503(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "user@example.com" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ---------------------------------------------------------------------------
// Verify
// ---------------------------------------------------------------------------

/// Redeeming a valid token creates the user, a free subscription, and
/// returns both JWT tokens.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_creates_user_and_session(pool: PgPool) {
    let token = seed_login_token(&pool, "new@example.com").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "token": token });
    let response = post_json(app, "/api/v1/auth/verify", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["email"], "new@example.com");

    // The user exists, is verified, and has a free subscription.
    let user = UserRepo::find_by_email(&pool, "new@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert!(user.email_verified_at.is_some());

    let subscription = SubscriptionRepo::find_by_user(&pool, user.id)
        .await
        .unwrap()
        .expect("subscription should exist");
    assert_eq!(subscription.plan.as_str(), "free");
}

/// A login token is single-use: the second redemption fails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_token_is_single_use(pool: PgPool) {
    let token = seed_login_token(&pool, "once@example.com").await;

    let body = serde_json::json!({ "token": token });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(common::build_test_app(pool), "/api/v1/auth/verify", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown token is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_unknown_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "token": "definitely-not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/verify", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An expired token is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_expired_token_rejected(pool: PgPool) {
    let token = tokens::generate_token();
    let expires_at = Utc::now() - Duration::hours(1);
    LoginTokenRepo::create(&pool, "late@example.com", &token.hash, expires_at)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "token": token.plaintext });
    let response = post_json(app, "/api/v1/auth/verify", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Redeeming a link sweeps expired and consumed tokens from the table.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_sweeps_stale_tokens(pool: PgPool) {
    // A leftover token from an abandoned login attempt.
    let stale = tokens::generate_token();
    let expires_at = Utc::now() - Duration::hours(1);
    LoginTokenRepo::create(&pool, "glemt@example.com", &stale.hash, expires_at)
        .await
        .unwrap();

    let token = seed_login_token(&pool, "aktiv@example.com").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        serde_json::json!({ "token": token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The expired token and the just-consumed one are both gone.
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM login_tokens")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

/// Verifying twice for the same email (separate tokens) reuses the account.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_existing_user_logs_in(pool: PgPool) {
    let first = seed_login_token(&pool, "repeat@example.com").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        serde_json::json!({ "token": first }),
    )
    .await;
    let first_json = body_json(response).await;

    let second = seed_login_token(&pool, "repeat@example.com").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        serde_json::json!({ "token": second }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second_json = body_json(response).await;

    assert_eq!(first_json["user"]["id"], second_json["user"]["id"]);
}

// ---------------------------------------------------------------------------
// Refresh and logout
// ---------------------------------------------------------------------------

/// Refreshing rotates the token pair; the old refresh token dies.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    let token = seed_login_token(&pool, "rotate@example.com").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        serde_json::json!({ "token": token }),
    )
    .await;
    let json = body_json(response).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a different refresh token.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"].as_str().unwrap(), refresh_token);

    // The original refresh token is now revoked.
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes every session for the user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let token = seed_login_token(&pool, "logout@example.com").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/verify",
        serde_json::json!({ "token": token }),
    )
    .await;
    let json = body_json(response).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        &access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /auth/me returns the authenticated user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_profile(pool: PgPool) {
    let (user, token) = common::create_authed_user(&pool, "me@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["email"], "me@example.com");
}

/// PATCH /auth/me updates the display name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_me_sets_name(pool: PgPool) {
    let (_user, token) = common::create_authed_user(&pool, "name@example.com").await;
    let app = common::build_test_app(pool);

    let response = patch_json_auth(
        app,
        "/api/v1/auth/me",
        &token,
        serde_json::json!({ "name": "Kari Nordmann" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Kari Nordmann");
}

/// A request without an Authorization header is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
