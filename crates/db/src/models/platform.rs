//! Platform catalog entity model.

use serde::Serialize;
use slettmeg_core::status::Difficulty;
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A platform row from the `platforms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub guide_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
