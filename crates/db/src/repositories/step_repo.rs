//! Repository for the `deletion_steps` table.

use slettmeg_core::steps::StepTemplate;
use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::DeletionStep;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, request_id, step_key, title, description, position, \
                        is_completed, completed_at, created_at, updated_at";

/// Provides operations on request checklists.
pub struct StepRepo;

impl StepRepo {
    /// Insert a generated checklist for a request, preserving order.
    pub async fn insert_templates(
        pool: &PgPool,
        request_id: DbId,
        templates: &[StepTemplate],
    ) -> Result<Vec<DeletionStep>, sqlx::Error> {
        let query = format!(
            "INSERT INTO deletion_steps (request_id, step_key, title, description, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let mut steps = Vec::with_capacity(templates.len());
        for (position, template) in templates.iter().enumerate() {
            let step = sqlx::query_as::<_, DeletionStep>(&query)
                .bind(request_id)
                .bind(&template.key)
                .bind(&template.title)
                .bind(&template.description)
                .bind(position as i32)
                .fetch_one(pool)
                .await?;
            steps.push(step);
        }
        Ok(steps)
    }

    /// List a request's checklist in guided order.
    pub async fn list_for_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<DeletionStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deletion_steps
             WHERE request_id = $1
             ORDER BY position"
        );
        sqlx::query_as::<_, DeletionStep>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }

    /// Mark one step completed or uncompleted, scoped to its request.
    ///
    /// Completing an already-completed step keeps the original timestamp;
    /// uncompleting clears it. Returns `None` if the step does not belong
    /// to the request.
    pub async fn set_completed(
        pool: &PgPool,
        request_id: DbId,
        step_id: DbId,
        completed: bool,
    ) -> Result<Option<DeletionStep>, sqlx::Error> {
        let query = format!(
            "UPDATE deletion_steps SET
                is_completed = $3,
                completed_at = CASE
                    WHEN $3 THEN COALESCE(completed_at, NOW())
                    ELSE NULL
                END
             WHERE id = $2 AND request_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeletionStep>(&query)
            .bind(request_id)
            .bind(step_id)
            .bind(completed)
            .fetch_optional(pool)
            .await
    }

    /// Mark every step of a request completed.
    ///
    /// Used by the request-level complete override; steps that were
    /// already completed keep their original timestamp.
    pub async fn complete_all(pool: &PgPool, request_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE deletion_steps SET
                is_completed = TRUE,
                completed_at = COALESCE(completed_at, NOW())
             WHERE request_id = $1 AND is_completed = FALSE",
        )
        .bind(request_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count (completed, total) steps for a request.
    pub async fn progress(pool: &PgPool, request_id: DbId) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE is_completed), COUNT(*)
             FROM deletion_steps WHERE request_id = $1",
        )
        .bind(request_id)
        .fetch_one(pool)
        .await
    }
}
