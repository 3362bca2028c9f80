//! Integration tests for the public platform catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use slettmeg_core::catalog::PLATFORM_CATALOG;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// The seeded catalog comes back in full, ordered by name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_platforms_returns_seeded_catalog(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/platforms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let platforms = json["data"].as_array().unwrap();
    assert_eq!(platforms.len(), PLATFORM_CATALOG.len());

    let names: Vec<&str> = platforms
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "platforms should be ordered by name");
}

/// `?category=` narrows the listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_platforms_filters_by_category(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/platforms?category=Dating").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let platforms = json["data"].as_array().unwrap();
    assert!(!platforms.is_empty());
    for platform in platforms {
        assert_eq!(platform["category"], "Dating");
    }
}

/// Seeding twice does not duplicate rows (upsert on slug).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/platforms").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"].as_array().unwrap().len(),
        PLATFORM_CATALOG.len()
    );
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// Lookup by slug works and attaches the curated GDPR contact.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_platform_by_slug_includes_contact(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/platforms/facebook").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "facebook");
    assert!(
        !json["data"]["gdpr_contact"].is_null(),
        "facebook should have a curated GDPR contact"
    );
}

/// Lookup by numeric id resolves the same platform as lookup by slug.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_platform_by_id(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/platforms/spotify",
    )
    .await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/platforms/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "spotify");
}

/// The standalone contact endpoint returns the curated entry, or null
/// data for a known platform without one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_gdpr_contact(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/platforms/netflix/gdpr-contact",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "privacy@netflix.com");

    // Known platform, no curated contact: 200 with null data.
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/platforms/vinted/gdpr-contact",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());

    // Unknown platform: still 404.
    let response = get(
        common::build_test_app(pool),
        "/api/v1/platforms/no-such-service/gdpr-contact",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Unknown slugs are 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_platform_returns_404(pool: PgPool) {
    slettmeg_db::seed::seed_platforms(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/platforms/no-such-service").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
