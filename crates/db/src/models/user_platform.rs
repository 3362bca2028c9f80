//! Tracked-platform ("my accounts") entity model and DTOs.

use serde::{Deserialize, Serialize};
use slettmeg_core::status::{Difficulty, PlatformStatus};
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_platforms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPlatform {
    pub id: DbId,
    pub user_id: DbId,
    pub platform_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: PlatformStatus,
    pub username: Option<String>,
    pub notes: Option<String>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A tracked platform joined with catalog display fields, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPlatformWithPlatform {
    pub id: DbId,
    pub user_id: DbId,
    pub platform_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: PlatformStatus,
    pub username: Option<String>,
    pub notes: Option<String>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub platform_name: String,
    pub platform_slug: String,
    pub platform_category: String,
    #[sqlx(try_from = "String")]
    pub platform_difficulty: Difficulty,
}

/// DTO for tracking a platform.
#[derive(Debug)]
pub struct CreateUserPlatform {
    pub user_id: DbId,
    pub platform_id: DbId,
    pub username: Option<String>,
    pub notes: Option<String>,
}

/// DTO for patching a tracked platform. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserPlatform {
    pub status: Option<PlatformStatus>,
    pub username: Option<String>,
    pub notes: Option<String>,
}
