//! Profile Routes - Key-value writer profile store
//!
//! HTTP handlers that delegate to ProfileService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{ProfileResponse, PutProfileRequest};
use crate::AppState;

/// List all profile entries
#[utoipa::path(
    get,
    path = "/soullift/profile",
    responses(
        (status = 200, description = "All profile entries", body = Vec<ProfileResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileResponse>>, (StatusCode, String)> {
    let profiles = state
        .profile_service
        .list()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// Get a profile entry by key
#[utoipa::path(
    get,
    path = "/soullift/profile/{key}",
    params(
        ("key" = String, Path, description = "Profile key")
    ),
    responses(
        (status = 200, description = "Profile entry", body = ProfileResponse),
        (status = 404, description = "Profile entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let profile = state
        .profile_service
        .get(&key)
        .await
        .map_err(|e| match e {
            soullift::DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "Profile entry not found".to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(Json(profile.into()))
}

/// Insert or replace a profile entry
#[utoipa::path(
    put,
    path = "/soullift/profile/{key}",
    params(
        ("key" = String, Path, description = "Profile key")
    ),
    request_body = PutProfileRequest,
    responses(
        (status = 200, description = "Profile entry saved", body = ProfileResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn put_profile(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<PutProfileRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let profile = state
        .profile_service
        .set(&key, payload.value)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(profile.into()))
}

/// Delete a profile entry
#[utoipa::path(
    delete,
    path = "/soullift/profile/{key}",
    params(
        ("key" = String, Path, description = "Profile key")
    ),
    responses(
        (status = 200, description = "Profile entry deleted"),
        (status = 404, description = "Profile entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .profile_service
        .remove(&key)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Profile entry not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Profile entry deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/soullift/profile", get(list_profiles))
        .route(
            "/soullift/profile/:key",
            get(get_profile).put(put_profile).delete(delete_profile),
        )
}
