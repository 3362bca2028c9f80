//! Handlers for the `/letters` resource: GDPR letter generation and
//! delivery to platform privacy contacts.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use slettmeg_core::contacts::gdpr_contact;
use slettmeg_core::error::CoreError;
use slettmeg_core::letter::{email_subject, generate_letter, LetterRequest, LetterType};
use slettmeg_core::lifecycle::platform_status_for;
use slettmeg_core::status::{RequestStatus, RequestType};
use slettmeg_core::steps::generate_steps;
use slettmeg_core::types::DbId;
use slettmeg_db::models::platform::Platform;
use slettmeg_db::models::request::{CreateDeletionRequest, DeletionRequest, UpdateDeletionRequest};
use slettmeg_db::repositories::{PlatformRepo, RequestRepo, StepRepo, UserPlatformRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /letters/generate` and `POST /letters/send`.
#[derive(Debug, Deserialize)]
pub struct LetterBody {
    /// Platform id or slug.
    pub platform: String,
    /// One of `deletion`, `export`, `access`, `correction`.
    /// Unknown or missing values default to `deletion`.
    pub letter_type: Option<String>,
    /// Username, email, or id on the platform, rendered into the letter.
    pub account_identifier: Option<String>,
    /// Free-text block appended to the letter body.
    pub additional_info: Option<String>,
    /// Override the sender name; defaults to the authenticated user's
    /// display name (or email when no name is set).
    pub requester_name: Option<String>,
    /// Override the sender address; defaults to the authenticated user's
    /// email.
    pub requester_email: Option<String>,
}

/// A generated letter ready to copy or send.
#[derive(Debug, Serialize)]
pub struct GeneratedLetter {
    pub subject: &'static str,
    pub body: String,
    pub letter_type: LetterType,
    /// The platform's privacy email, when we have a curated contact.
    pub recipient: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/letters/generate
///
/// Render a GDPR letter for the authenticated user. Pure generation; the
/// user copies the text or follows up with `POST /letters/send`.
pub async fn generate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<LetterBody>,
) -> AppResult<Json<DataResponse<GeneratedLetter>>> {
    let (letter, _) = build_letter(&state, &auth_user, &input).await?;
    Ok(Json(DataResponse { data: letter }))
}

/// POST /api/v1/letters/send
///
/// Generate the letter and email it to the platform's privacy contact,
/// with the user in CC so they keep a copy. Requires a configured mailer
/// and a curated email contact for the platform.
///
/// Once the mail has gone out, the user's open request for the platform
/// moves to `submitted` (`submitted_at` is stamped on first entry only);
/// when no open request exists, one is created directly in that state so
/// the dashboard reflects the letter.
pub async fn send(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<LetterBody>,
) -> AppResult<Json<DataResponse<GeneratedLetter>>> {
    let mailer = state
        .mailer
        .as_ref()
        .ok_or(AppError::ServiceUnavailable("Email delivery"))?;

    let (letter, platform) = build_letter(&state, &auth_user, &input).await?;
    let recipient = letter.recipient.ok_or_else(|| {
        AppError::BadRequest(format!(
            "{} has no known privacy email; copy the letter and use their web form instead",
            platform.name
        ))
    })?;

    mailer
        .send_gdpr_letter(recipient, Some(&auth_user.email), letter.subject, &letter.body)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to send letter: {e}")))?;

    submit_request_for_platform(&state.pool, auth_user.user_id, &platform).await?;

    Ok(Json(DataResponse { data: letter }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn build_letter(
    state: &AppState,
    auth_user: &AuthUser,
    input: &LetterBody,
) -> AppResult<(GeneratedLetter, Platform)> {
    let platform = PlatformRepo::find_by_id_or_slug(&state.pool, &input.platform)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Platform '{}' not found", input.platform)))?;

    // Letters carry the user's display name when one is set; the email
    // address identifies them either way. Both can be overridden per
    // letter, for requests filed on someone else's behalf.
    let requester_name = match &input.requester_name {
        Some(name) => name.clone(),
        None => UserRepo::find_by_id(&state.pool, auth_user.user_id)
            .await?
            .and_then(|user| user.name)
            .unwrap_or_else(|| auth_user.email.clone()),
    };
    let requester_email = input
        .requester_email
        .clone()
        .unwrap_or_else(|| auth_user.email.clone());

    let letter_type = input
        .letter_type
        .as_deref()
        .map(LetterType::from_str_or_default)
        .unwrap_or(LetterType::Deletion);

    let body = generate_letter(&LetterRequest {
        requester_name,
        requester_email,
        platform_name: platform.name.clone(),
        letter_type,
        account_identifier: input.account_identifier.clone(),
        additional_info: input.additional_info.clone(),
    });

    let recipient = gdpr_contact(&platform.slug).and_then(|contact| contact.email);

    Ok((
        GeneratedLetter {
            subject: email_subject(letter_type),
            body,
            letter_type,
            recipient,
        },
        platform,
    ))
}

/// Move the user's open request for the platform into `submitted`,
/// creating one (type `gdpr_request`) when none exists.
///
/// A request created here gets its checklist seeded the same way
/// `POST /requests` seeds it; every request carries its steps from
/// birth, regardless of which door it came in through.
pub async fn submit_request_for_platform(
    pool: &PgPool,
    user_id: DbId,
    platform: &Platform,
) -> AppResult<DeletionRequest> {
    let request = match RequestRepo::find_open_for_platform(pool, user_id, platform.id).await? {
        Some(request) => request,
        None => {
            let request = RequestRepo::create(
                pool,
                &CreateDeletionRequest {
                    user_id,
                    platform_id: platform.id,
                    request_type: RequestType::GdprRequest,
                    message: None,
                },
            )
            .await?;

            let templates = generate_steps(&platform.slug, &platform.name);
            StepRepo::insert_templates(pool, request.id, &templates).await?;

            request
        }
    };

    let request = RequestRepo::update(
        pool,
        request.id,
        user_id,
        &UpdateDeletionRequest {
            status: Some(RequestStatus::Submitted),
            message: None,
            response: None,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Request",
        id: request.id,
    }))?;

    UserPlatformRepo::set_status_for_platform(
        pool,
        user_id,
        platform.id,
        platform_status_for(request.status),
    )
    .await?;

    Ok(request)
}
