//! Chat message entity model.

use serde::Serialize;
use slettmeg_core::status::ChatRole;
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A chat message row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    pub role: ChatRole,
    pub content: String,
    pub created_at: Timestamp,
}
