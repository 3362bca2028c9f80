//! Checklist step entity model.

use serde::Serialize;
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A checklist step row from the `deletion_steps` table.
///
/// `position` is the 0-based index within the request's checklist; the
/// checklist is always read back ordered by it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletionStep {
    pub id: DbId,
    pub request_id: DbId,
    pub step_key: String,
    pub title: String,
    pub description: String,
    pub position: i32,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
