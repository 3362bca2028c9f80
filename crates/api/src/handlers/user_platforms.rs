//! Handlers for the `/user-platforms` resource: the user's tracked
//! platform list with per-platform status and notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use slettmeg_core::error::CoreError;
use slettmeg_core::types::DbId;
use slettmeg_db::models::user_platform::{
    CreateUserPlatform, UpdateUserPlatform, UserPlatform, UserPlatformWithPlatform,
};
use slettmeg_db::repositories::{PlatformRepo, UserPlatformRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /user-platforms`.
#[derive(Debug, Deserialize)]
pub struct TrackPlatformBody {
    pub platform_id: DbId,
    pub username: Option<String>,
    pub notes: Option<String>,
}

/// GET /api/v1/user-platforms
pub async fn list_user_platforms(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UserPlatformWithPlatform>>>> {
    let entries = UserPlatformRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/user-platforms
///
/// Start tracking a platform. Tracking the same platform twice trips the
/// unique constraint and surfaces as 409.
pub async fn track_platform(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<TrackPlatformBody>,
) -> AppResult<(StatusCode, Json<DataResponse<UserPlatform>>)> {
    let platform = PlatformRepo::find_by_id(&state.pool, input.platform_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id: input.platform_id,
        }))?;

    let entry = UserPlatformRepo::create(
        &state.pool,
        &CreateUserPlatform {
            user_id: auth_user.user_id,
            platform_id: platform.id,
            username: input.username,
            notes: input.notes,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PATCH /api/v1/user-platforms/{id}
pub async fn update_user_platform(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserPlatform>,
) -> AppResult<Json<DataResponse<UserPlatform>>> {
    let entry = UserPlatformRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tracked platform",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/user-platforms/{id}
pub async fn untrack_platform(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserPlatformRepo::delete(&state.pool, id, auth_user.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tracked platform",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
