//! Handlers for the `/platforms` resource (public catalog).

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use slettmeg_core::contacts::{gdpr_contact, GdprContact};
use slettmeg_db::models::platform::Platform;
use slettmeg_db::repositories::PlatformRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /platforms`.
#[derive(Debug, Deserialize)]
pub struct ListPlatformsQuery {
    pub category: Option<String>,
}

/// A platform with its curated GDPR contact, when one is known.
#[derive(Debug, Serialize)]
pub struct PlatformDetail {
    #[serde(flatten)]
    pub platform: Platform,
    pub gdpr_contact: Option<&'static GdprContact>,
}

/// GET /api/v1/platforms
///
/// List the catalog, optionally filtered by `?category=`.
pub async fn list_platforms(
    State(state): State<AppState>,
    Query(query): Query<ListPlatformsQuery>,
) -> AppResult<Json<DataResponse<Vec<Platform>>>> {
    let platforms = match query.category.as_deref() {
        Some(category) => PlatformRepo::list_by_category(&state.pool, category).await?,
        None => PlatformRepo::list(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: platforms }))
}

/// GET /api/v1/platforms/{id_or_slug}
///
/// Fetch a single platform by numeric id or slug, with its curated GDPR
/// contact attached when we have one.
pub async fn get_platform(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> AppResult<Json<DataResponse<PlatformDetail>>> {
    let platform = PlatformRepo::find_by_id_or_slug(&state.pool, &id_or_slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Platform '{id_or_slug}' not found")))?;

    let contact = gdpr_contact(&platform.slug);

    Ok(Json(DataResponse {
        data: PlatformDetail {
            platform,
            gdpr_contact: contact,
        },
    }))
}

/// GET /api/v1/platforms/{id_or_slug}/gdpr-contact
///
/// The curated GDPR contact alone. Known platform without a curated
/// contact answers with `null` data; an unknown platform is still 404.
pub async fn get_gdpr_contact(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> AppResult<Json<DataResponse<Option<&'static GdprContact>>>> {
    let platform = PlatformRepo::find_by_id_or_slug(&state.pool, &id_or_slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Platform '{id_or_slug}' not found")))?;

    Ok(Json(DataResponse {
        data: gdpr_contact(&platform.slug),
    }))
}
