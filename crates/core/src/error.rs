//! Domain-level error taxonomy shared across crates.

use crate::types::DbId;

/// Errors produced by domain logic and surfaced through the API layer.
///
/// The `api` crate maps each variant to an HTTP status code; see its
/// `AppError` implementation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (or is not visible to the caller).
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Human-readable entity name, e.g. `"Platform"`.
        entity: &'static str,
        /// The id that was looked up.
        id: DbId,
    },

    /// The input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
