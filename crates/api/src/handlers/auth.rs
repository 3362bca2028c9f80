//! Handlers for the `/auth` resource (magic-link login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use slettmeg_core::error::CoreError;
use slettmeg_core::tokens;
use slettmeg_core::types::DbId;
use slettmeg_db::models::auth::CreateSession;
use slettmeg_db::models::user::User;
use slettmeg_db::repositories::{LoginTokenRepo, SessionRepo, SubscriptionRepo, UserRepo};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::magic_link::{build_verify_url, normalize_email};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
}

/// Request body for `POST /auth/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for `PATCH /auth/me`.
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
}

/// Successful authentication response returned by verify and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Start a passwordless login: store a hashed single-use token and email
/// the magic link. Always returns 202 for plausible addresses so the
/// endpoint does not reveal which emails have accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<&'static str>>)> {
    let mailer = state
        .mailer
        .as_ref()
        .ok_or(AppError::ServiceUnavailable("Email delivery"))?;

    let input = LoginRequest {
        email: normalize_email(&input.email),
    };
    input
        .validate()
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid email address".into())))?;
    let email = input.email;

    // 1. Generate the token; only its hash touches the database.
    let token = tokens::generate_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.login_token_expiry_hours);
    LoginTokenRepo::create(&state.pool, &email, &token.hash, expires_at).await?;

    // 2. Email the link.
    let verify_url = build_verify_url(&state.config.app_url, &token.plaintext);
    mailer
        .send_magic_link(&email, &verify_url)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to send login email: {e}")))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: "Login link sent",
        }),
    ))
}

/// POST /api/v1/auth/verify
///
/// Exchange a magic-link token for a JWT session. Consuming the token is
/// atomic, so a link can only ever be redeemed once. First-time logins
/// create the user, attach a free subscription, and send a welcome email.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Atomically consume the token.
    let token_hash = tokens::hash_token(&input.token);
    let login_token = LoginTokenRepo::consume(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired login link".into(),
            ))
        })?;

    // 2. Sweep dead tokens while we are here; the table only needs to
    //    hold links that can still be redeemed.
    let removed = LoginTokenRepo::cleanup_expired(&state.pool).await?;
    if removed > 0 {
        tracing::debug!(removed, "removed stale login tokens");
    }

    // 3. First login creates the account.
    let existing = UserRepo::find_by_email(&state.pool, &login_token.email).await?;
    let is_new_user = existing.is_none();
    let user = match existing {
        Some(user) => user,
        None => UserRepo::find_or_create(&state.pool, &login_token.email).await?,
    };

    UserRepo::mark_email_verified(&state.pool, user.id).await?;

    // 4. Every account carries a subscription row, free by default.
    SubscriptionRepo::ensure_free(&state.pool, user.id).await?;

    // 5. Welcome email is best-effort; a delivery failure must not block login.
    if is_new_user {
        if let Some(mailer) = &state.mailer {
            if let Err(e) = mailer.send_welcome(&user.email, user.name.as_deref()).await {
                tracing::warn!(error = %e, user_id = user.id, "welcome email failed");
            }
        }
    }

    let response = create_auth_response(&state, user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token and find the active session.
    let token_hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 2. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 3. Re-issue for the session's user.
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<User>>> {
    let user = find_user(&state, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// PATCH /api/v1/auth/me
///
/// Update the display name.
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateMeRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::update_name(&state.pool, auth_user.user_id, input.name.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_user(state: &AppState, user_id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = CreateSession {
        user_id: user.id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user,
    })
}
