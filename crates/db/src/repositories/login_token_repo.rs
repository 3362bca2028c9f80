//! Repository for the `login_tokens` table.

use slettmeg_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::auth::LoginToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, token_hash, expires_at, consumed_at, created_at";

/// Provides operations on magic-link login tokens.
pub struct LoginTokenRepo;

impl LoginTokenRepo {
    /// Insert a new token, returning the created row.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<LoginToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO login_tokens (email, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginToken>(&query)
            .bind(email)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Consume a token by hash, atomically.
    ///
    /// The single UPDATE both checks validity (unconsumed, unexpired) and
    /// marks the token used, so two concurrent verifications of the same
    /// link cannot both succeed. Returns `None` for unknown, expired, or
    /// already-consumed tokens.
    pub async fn consume(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<LoginToken>, sqlx::Error> {
        let query = format!(
            "UPDATE login_tokens SET consumed_at = NOW()
             WHERE token_hash = $1
               AND consumed_at IS NULL
               AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginToken>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete expired and consumed tokens. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM login_tokens WHERE expires_at < NOW() OR consumed_at IS NOT NULL",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
