//! Integration tests for the billing endpoints with Stripe disabled, plus
//! the subscription read path which works without Stripe.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;

/// Every account reads back a subscription; missing rows are repaired to
/// the free plan.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_subscription_defaults_to_free(pool: PgPool) {
    let (_user, token) = common::create_authed_user(&pool, "free@example.com").await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/billing/subscription",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["plan"], "free");
    assert_eq!(json["data"]["status"], "active");
    // Stripe identifiers never leave the API.
    assert!(json["data"]["stripe_customer_id"].is_null());
}

/// Checkout, portal, and webhook all answer 503 while Stripe is not
/// configured.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_billing_endpoints_unavailable_without_stripe(pool: PgPool) {
    let (_user, token) = common::create_authed_user(&pool, "stripe@example.com").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/billing/checkout",
        &token,
        serde_json::json!({ "plan": "pro" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/billing/portal",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = common::post_json(
        common::build_test_app(pool),
        "/api/v1/billing/webhook",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

/// The chat assistant likewise degrades to 503 when unconfigured.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_chat_unavailable_without_assistant(pool: PgPool) {
    let (_user, token) = common::create_authed_user(&pool, "chat@example.com").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/chat",
        &token,
        serde_json::json!({ "message": "Hei" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // History still works; it never touches the model.
    let response = get_auth(common::build_test_app(pool), "/api/v1/chat/messages", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
