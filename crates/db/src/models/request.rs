//! Deletion request entity model and DTOs.

use serde::{Deserialize, Serialize};
use slettmeg_core::status::{RequestStatus, RequestType};
use slettmeg_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::step::DeletionStep;

/// A deletion request row from the `deletion_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletionRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub platform_id: DbId,
    #[sqlx(try_from = "String")]
    pub request_type: RequestType,
    #[sqlx(try_from = "String")]
    pub status: RequestStatus,
    pub message: Option<String>,
    pub response: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A request joined with its platform's display fields, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletionRequestWithPlatform {
    pub id: DbId,
    pub user_id: DbId,
    pub platform_id: DbId,
    #[sqlx(try_from = "String")]
    pub request_type: RequestType,
    #[sqlx(try_from = "String")]
    pub status: RequestStatus,
    pub message: Option<String>,
    pub response: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub platform_name: String,
    pub platform_slug: String,
}

/// A request with its full ordered checklist, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct DeletionRequestDetail {
    #[serde(flatten)]
    pub request: DeletionRequest,
    pub steps: Vec<DeletionStep>,
}

/// DTO for creating a deletion request.
#[derive(Debug)]
pub struct CreateDeletionRequest {
    pub user_id: DbId,
    pub platform_id: DbId,
    pub request_type: RequestType,
    pub message: Option<String>,
}

/// DTO for patching a deletion request. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDeletionRequest {
    pub status: Option<RequestStatus>,
    pub message: Option<String>,
    pub response: Option<String>,
}
