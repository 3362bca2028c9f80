//! Handlers for the `/requests` resource: the deletion-request lifecycle
//! and its step checklist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use slettmeg_core::error::CoreError;
use slettmeg_core::lifecycle::{platform_status_for, status_for_step_count};
use slettmeg_core::status::{PlatformStatus, RequestStatus, RequestType};
use slettmeg_core::steps::generate_steps;
use slettmeg_core::types::DbId;
use slettmeg_db::models::request::{
    CreateDeletionRequest, DeletionRequest, DeletionRequestDetail, DeletionRequestWithPlatform,
    UpdateDeletionRequest,
};
use slettmeg_db::repositories::{PlatformRepo, RequestRepo, StepRepo, UserPlatformRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /requests`.
#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    pub platform_id: DbId,
    #[serde(default = "default_request_type")]
    pub request_type: RequestType,
    pub message: Option<String>,
}

fn default_request_type() -> RequestType {
    RequestType::AccountDeletion
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/requests
///
/// List the authenticated user's requests, newest first, with platform
/// display fields joined in.
pub async fn list_requests(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<DeletionRequestWithPlatform>>>> {
    let requests = RequestRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/requests
///
/// Open a deletion request against a platform and seed its step
/// checklist. A user can have at most one open request per platform;
/// completed or rejected requests do not block starting over.
pub async fn create_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateRequestBody>,
) -> AppResult<(StatusCode, Json<DataResponse<DeletionRequestDetail>>)> {
    // 1. The platform must exist.
    let platform = PlatformRepo::find_by_id(&state.pool, input.platform_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id: input.platform_id,
        }))?;

    // 2. Reject a second open request for the same platform.
    if RequestRepo::has_open_request(&state.pool, auth_user.user_id, platform.id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "An open request for {} already exists",
            platform.name
        ))));
    }

    // 3. Create the request and seed its checklist from the platform's
    //    step template (curated for well-known platforms, generic otherwise).
    let request = RequestRepo::create(
        &state.pool,
        &CreateDeletionRequest {
            user_id: auth_user.user_id,
            platform_id: platform.id,
            request_type: input.request_type,
            message: input.message,
        },
    )
    .await?;

    let templates = generate_steps(&platform.slug, &platform.name);
    let steps = StepRepo::insert_templates(&state.pool, request.id, &templates).await?;

    // 4. An open request shows the platform as in progress on the dashboard.
    UserPlatformRepo::set_status_for_platform(
        &state.pool,
        auth_user.user_id,
        platform.id,
        PlatformStatus::InProgress,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DeletionRequestDetail { request, steps },
        }),
    ))
}

/// GET /api/v1/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletionRequestDetail>>> {
    let request = find_request(&state, id, auth_user.user_id).await?;
    let steps = StepRepo::list_for_request(&state.pool, request.id).await?;
    Ok(Json(DataResponse {
        data: DeletionRequestDetail { request, steps },
    }))
}

/// PATCH /api/v1/requests/{id}
///
/// Update status, the user's message, and/or the platform's response.
/// Timestamp stamping (`submitted_at`, `completed_at`) happens in the
/// repository, atomically with the write.
pub async fn update_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeletionRequest>,
) -> AppResult<Json<DataResponse<DeletionRequest>>> {
    let status_changed = input.status.is_some();
    let request = RequestRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;

    if status_changed {
        sync_platform_status(&state, &request).await?;
    }

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/v1/requests/{id}
///
/// Remove a request and its steps, and reset the platform's dashboard
/// status to `not_started`. Returns 204 No Content.
pub async fn delete_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let request = find_request(&state, id, auth_user.user_id).await?;

    RequestRepo::delete(&state.pool, request.id, auth_user.user_id).await?;

    UserPlatformRepo::set_status_for_platform(
        &state.pool,
        auth_user.user_id,
        request.platform_id,
        PlatformStatus::NotStarted,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/requests/{id}/complete
///
/// Mark the whole request done: every remaining step is completed and
/// the request moves to `completed` in one go.
pub async fn complete_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletionRequestDetail>>> {
    let request = find_request(&state, id, auth_user.user_id).await?;

    StepRepo::complete_all(&state.pool, request.id).await?;

    let request = RequestRepo::update(
        &state.pool,
        request.id,
        auth_user.user_id,
        &UpdateDeletionRequest {
            status: Some(RequestStatus::Completed),
            message: None,
            response: None,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Request",
        id,
    }))?;

    sync_platform_status(&state, &request).await?;

    let steps = StepRepo::list_for_request(&state.pool, request.id).await?;
    Ok(Json(DataResponse {
        data: DeletionRequestDetail { request, steps },
    }))
}

/// POST /api/v1/requests/{id}/steps/{step_id}/complete
pub async fn complete_step(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<DeletionRequestDetail>>> {
    set_step_completed(state, auth_user, id, step_id, true).await
}

/// POST /api/v1/requests/{id}/steps/{step_id}/uncomplete
pub async fn uncomplete_step(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<DeletionRequestDetail>>> {
    set_step_completed(state, auth_user, id, step_id, false).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_request(
    state: &AppState,
    id: DbId,
    user_id: DbId,
) -> AppResult<DeletionRequest> {
    RequestRepo::find_for_user(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))
}

/// Push the request's status into the per-user platform cache.
async fn sync_platform_status(state: &AppState, request: &DeletionRequest) -> AppResult<()> {
    UserPlatformRepo::set_status_for_platform(
        &state.pool,
        request.user_id,
        request.platform_id,
        platform_status_for(request.status),
    )
    .await?;
    Ok(())
}

/// Toggle one step and recompute the request status from step progress.
///
/// A manually-set terminal status (`rejected`) is left alone; otherwise
/// the status follows the checklist: no steps done is `pending`, some
/// done is `in_progress`, all done is `completed`.
async fn set_step_completed(
    state: AppState,
    auth_user: AuthUser,
    id: DbId,
    step_id: DbId,
    completed: bool,
) -> AppResult<Json<DataResponse<DeletionRequestDetail>>> {
    // 1. Ownership check before touching steps.
    let request = find_request(&state, id, auth_user.user_id).await?;

    // 2. Toggle the step.
    StepRepo::set_completed(&state.pool, request.id, step_id, completed)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Step",
            id: step_id,
        }))?;

    // 3. Derive the request status from progress.
    let (done, total) = StepRepo::progress(&state.pool, request.id).await?;
    let request = if request.status == RequestStatus::Rejected {
        request
    } else {
        let next = status_for_step_count(done as usize, total as usize);
        RequestRepo::update(
            &state.pool,
            request.id,
            auth_user.user_id,
            &UpdateDeletionRequest {
                status: Some(next),
                message: None,
                response: None,
            },
        )
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?
    };

    sync_platform_status(&state, &request).await?;

    let steps = StepRepo::list_for_request(&state.pool, request.id).await?;
    Ok(Json(DataResponse {
        data: DeletionRequestDetail { request, steps },
    }))
}
