//! Magic-link token and session models.
//!
//! Both tables store SHA-256 hashes of the tokens that went out in
//! email or in the refresh response; the raw values never touch disk.

use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A magic-link token row from the `login_tokens` table.
#[derive(Debug, Clone, FromRow)]
pub struct LoginToken {
    pub id: DbId,
    pub email: String,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub consumed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A refresh-token session row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
}
