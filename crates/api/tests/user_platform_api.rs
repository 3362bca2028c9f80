//! Integration tests for the tracked-platform list.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, patch_json_auth, post_json_auth};
use sqlx::PgPool;

async fn platform_id(pool: &PgPool, slug: &str) -> i64 {
    slettmeg_db::repositories::PlatformRepo::find_by_slug(pool, slug)
        .await
        .unwrap()
        .expect("platform should be seeded")
        .id
}

/// Tracking a platform creates an entry in not_started.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_track_platform(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let (_user, token) = common::create_authed_user(&pool, "track@example.com").await;
    let platform_id = platform_id(&pool, "reddit").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/user-platforms",
        &token,
        serde_json::json!({
            "platform_id": platform_id,
            "username": "u/gammelbruker",
            "notes": "gammel konto"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "not_started");
    assert_eq!(json["data"]["username"], "u/gammelbruker");
    assert_eq!(json["data"]["notes"], "gammel konto");
}

/// Tracking the same platform twice is a conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_track_platform_twice_returns_409(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let (_user, token) = common::create_authed_user(&pool, "twice@example.com").await;
    let platform_id = platform_id(&pool, "reddit").await;
    let body = serde_json::json!({ "platform_id": platform_id });

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/user-platforms",
        &token,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/user-platforms",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// The listing joins platform display fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_joins_platform_fields(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let (_user, token) = common::create_authed_user(&pool, "list@example.com").await;
    let platform_id = platform_id(&pool, "discord").await;

    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/user-platforms",
        &token,
        serde_json::json!({ "platform_id": platform_id }),
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/user-platforms",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["platform_slug"], "discord");
    assert!(entries[0]["platform_difficulty"].is_string());
}

/// Status, username, and notes are patchable; missing fields are left
/// alone.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_entry(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let (_user, token) = common::create_authed_user(&pool, "patch@example.com").await;
    let platform_id = platform_id(&pool, "discord").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/user-platforms",
        &token,
        serde_json::json!({ "platform_id": platform_id, "notes": "behold" }),
    )
    .await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = patch_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/user-platforms/{id}"),
        &token,
        serde_json::json!({ "status": "in_progress", "username": "discorduser#1234" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "in_progress");
    assert_eq!(json["data"]["username"], "discorduser#1234");
    assert_eq!(json["data"]["notes"], "behold");
}

/// Entries are scoped to their owner and deletable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_untrack_and_ownership(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let (_user, token) = common::create_authed_user(&pool, "owner@example.com").await;
    let (_other, other_token) = common::create_authed_user(&pool, "other@example.com").await;
    let platform_id = platform_id(&pool, "steam").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/user-platforms",
        &token,
        serde_json::json!({ "platform_id": platform_id }),
    )
    .await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    // Someone else cannot delete it.
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/user-platforms/{id}"),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner can.
    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/user-platforms/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
