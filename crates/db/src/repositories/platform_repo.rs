//! Repository for the `platforms` table.

use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::platform::Platform;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, category, description, difficulty, \
                        estimated_time, guide_url, created_at, updated_at";

/// Provides read access to the platform catalog.
pub struct PlatformRepo;

impl PlatformRepo {
    /// List all platforms ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms ORDER BY name");
        sqlx::query_as::<_, Platform>(&query).fetch_all(pool).await
    }

    /// List platforms in one category, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE category = $1 ORDER BY name");
        sqlx::query_as::<_, Platform>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a platform by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE id = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a platform by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE slug = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a path segment that may be either a numeric ID or a slug.
    pub async fn find_by_id_or_slug(
        pool: &PgPool,
        id_or_slug: &str,
    ) -> Result<Option<Platform>, sqlx::Error> {
        match id_or_slug.parse::<DbId>() {
            Ok(id) => Self::find_by_id(pool, id).await,
            Err(_) => Self::find_by_slug(pool, id_or_slug).await,
        }
    }
}
