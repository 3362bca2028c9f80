//! Repository for the `user_platforms` table.

use slettmeg_core::status::PlatformStatus;
use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_platform::{
    CreateUserPlatform, UpdateUserPlatform, UserPlatform, UserPlatformWithPlatform,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, platform_id, status, username, notes, started_at, \
                        completed_at, created_at, updated_at";

/// Same columns qualified for joins against `platforms`.
const JOINED_COLUMNS: &str = "up.id, up.user_id, up.platform_id, up.status, up.username, \
                               up.notes, up.started_at, up.completed_at, up.created_at, \
                               up.updated_at, p.name AS platform_name, \
                               p.slug AS platform_slug, p.category AS platform_category, \
                               p.difficulty AS platform_difficulty";

/// Provides CRUD operations for a user's tracked platforms.
pub struct UserPlatformRepo;

impl UserPlatformRepo {
    /// Track a platform for a user, returning the created row.
    ///
    /// The `uq_user_platforms_user_platform` constraint rejects tracking
    /// the same platform twice; the violation surfaces as a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserPlatform,
    ) -> Result<UserPlatform, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_platforms (user_id, platform_id, username, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPlatform>(&query)
            .bind(input.user_id)
            .bind(input.platform_id)
            .bind(&input.username)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List a user's tracked platforms with catalog fields, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserPlatformWithPlatform>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM user_platforms up
             JOIN platforms p ON p.id = up.platform_id
             WHERE up.user_id = $1
             ORDER BY up.created_at DESC"
        );
        sqlx::query_as::<_, UserPlatformWithPlatform>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an entry by ID, scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<UserPlatform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_platforms WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, UserPlatform>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Patch an entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateUserPlatform,
    ) -> Result<Option<UserPlatform>, sqlx::Error> {
        let query = format!(
            "UPDATE user_platforms SET
                status = COALESCE($3, status),
                username = COALESCE($4, username),
                notes = COALESCE($5, notes)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPlatform>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.username)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the cached per-user status for a platform.
    ///
    /// The entry is created lazily on first use; an existing entry keeps
    /// its username and notes and only has its status overwritten. This
    /// is how request mutations keep the dashboard cache in sync.
    /// `started_at` is stamped on the first move into in_progress;
    /// `completed_at` tracks the completed status (set on entry, cleared
    /// on exit), mirroring the timestamp rules on requests.
    pub async fn set_status_for_platform(
        pool: &PgPool,
        user_id: DbId,
        platform_id: DbId,
        status: PlatformStatus,
    ) -> Result<UserPlatform, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_platforms (user_id, platform_id, status, started_at, completed_at)
             VALUES (
                $1, $2, $3,
                CASE WHEN $3 = 'in_progress' THEN NOW() END,
                CASE WHEN $3 = 'completed' THEN NOW() END
             )
             ON CONFLICT ON CONSTRAINT uq_user_platforms_user_platform
             DO UPDATE SET
                status = EXCLUDED.status,
                started_at = CASE
                    WHEN EXCLUDED.status = 'in_progress'
                     AND user_platforms.started_at IS NULL THEN NOW()
                    ELSE user_platforms.started_at
                END,
                completed_at = CASE
                    WHEN EXCLUDED.status = 'completed'
                        THEN COALESCE(user_platforms.completed_at, NOW())
                    ELSE NULL
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPlatform>(&query)
            .bind(user_id)
            .bind(platform_id)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Untrack a platform. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_platforms WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
