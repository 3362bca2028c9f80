//! Repository for the `chat_messages` table.

use slettmeg_core::status::ChatRole;
use slettmeg_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat::ChatMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, role, content, created_at";

/// Provides operations on assistant chat history.
pub struct ChatMessageRepo;

impl ChatMessageRepo {
    /// Append a message to a user's history.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        role: ChatRole,
        content: &str,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages (user_id, role, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(role.as_str())
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// The most recent `limit` messages, returned in chronological order.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM (
                SELECT {COLUMNS} FROM chat_messages
                WHERE user_id = $1
                ORDER BY created_at DESC, id DESC
                LIMIT $2
             ) recent
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
