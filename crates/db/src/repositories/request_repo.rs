//! Repository for the `deletion_requests` table.

use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::request::{
    CreateDeletionRequest, DeletionRequest, DeletionRequestWithPlatform, UpdateDeletionRequest,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, platform_id, request_type, status, message, response, \
                        submitted_at, completed_at, created_at, updated_at";

/// Same columns qualified for joins against `platforms`.
const JOINED_COLUMNS: &str = "r.id, r.user_id, r.platform_id, r.request_type, r.status, \
                               r.message, r.response, r.submitted_at, r.completed_at, \
                               r.created_at, r.updated_at, p.name AS platform_name, \
                               p.slug AS platform_slug";

/// Provides CRUD operations for deletion requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDeletionRequest,
    ) -> Result<DeletionRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO deletion_requests (user_id, platform_id, request_type, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeletionRequest>(&query)
            .bind(input.user_id)
            .bind(input.platform_id)
            .bind(input.request_type.as_str())
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a request by ID, scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<DeletionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deletion_requests WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, DeletionRequest>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's requests with platform display fields, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DeletionRequestWithPlatform>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM deletion_requests r
             JOIN platforms p ON p.id = r.platform_id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, DeletionRequestWithPlatform>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user already has an open request for the platform.
    ///
    /// "Open" means not completed and not rejected; finished requests do
    /// not block starting over.
    pub async fn has_open_request(
        pool: &PgPool,
        user_id: DbId,
        platform_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM deletion_requests
             WHERE user_id = $1 AND platform_id = $2
               AND status NOT IN ('completed', 'rejected')",
        )
        .bind(user_id)
        .bind(platform_id)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// Find the user's open request for a platform, newest first.
    pub async fn find_open_for_platform(
        pool: &PgPool,
        user_id: DbId,
        platform_id: DbId,
    ) -> Result<Option<DeletionRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deletion_requests
             WHERE user_id = $1 AND platform_id = $2
               AND status NOT IN ('completed', 'rejected')
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, DeletionRequest>(&query)
            .bind(user_id)
            .bind(platform_id)
            .fetch_optional(pool)
            .await
    }

    /// Patch a request. Only non-`None` fields in `input` are applied.
    ///
    /// Timestamp stamping happens in SQL so it is atomic with the status
    /// write: the transition into `submitted` sets `submitted_at` once,
    /// and `completed_at` is kept in lockstep with the `completed` status
    /// (set on entry, cleared on exit).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateDeletionRequest,
    ) -> Result<Option<DeletionRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE deletion_requests SET
                status = COALESCE($3, status),
                message = COALESCE($4, message),
                response = COALESCE($5, response),
                submitted_at = CASE
                    WHEN $3 = 'submitted' AND submitted_at IS NULL THEN NOW()
                    ELSE submitted_at
                END,
                completed_at = CASE
                    WHEN $3 IS NULL THEN completed_at
                    WHEN $3 = 'completed' THEN COALESCE(completed_at, NOW())
                    ELSE NULL
                END
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeletionRequest>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.message)
            .bind(&input.response)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request (steps cascade). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM deletion_requests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
