//! Seed Routes - Generate and validate writing prompts
//!
//! HTTP handlers that delegate to SeedService and the domain validator.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;

use soullift::validate_seeds;

use crate::models::{
    GenerateSeedsRequest, SeedsResponse, ValidateSeedsRequest, ValidateSeedsResponse,
};
use crate::AppState;

/// Generate seed prompts
///
/// POST /soullift/seeds
#[utoipa::path(
    post,
    path = "/soullift/seeds",
    request_body = GenerateSeedsRequest,
    responses(
        (status = 200, description = "Generated seed prompts", body = SeedsResponse),
        (status = 400, description = "Missing core feeling"),
        (status = 503, description = "LLM provider not configured"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Seeds"
)]
pub async fn generate_seeds(
    State(state): State<AppState>,
    Json(payload): Json<GenerateSeedsRequest>,
) -> Result<Json<SeedsResponse>, (StatusCode, String)> {
    // The builder itself is a pure template fill; the non-empty
    // feeling contract is enforced here at the boundary.
    if payload.core_feeling.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "core_feeling must not be empty".to_string(),
        ));
    }

    let service = state.seed_service.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "LLM provider not configured".to_string(),
    ))?;

    let validate = payload.validate;
    let batch = service
        .generate(payload.into_context(), validate)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(SeedsResponse {
        id: Uuid::new_v4(),
        seeds: batch.seeds,
        issues: batch.issues,
        provider: batch.provider,
        model: batch.model,
    }))
}

/// Validate candidate seed lines
///
/// POST /soullift/seeds/validate
#[utoipa::path(
    post,
    path = "/soullift/seeds/validate",
    request_body = ValidateSeedsRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidateSeedsResponse),
    ),
    tag = "Seeds"
)]
pub async fn validate_candidates(
    Json(payload): Json<ValidateSeedsRequest>,
) -> Json<ValidateSeedsResponse> {
    let validation = validate_seeds(&payload.prompts, payload.recipient_name.as_deref());
    Json(validation.into())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/soullift/seeds", post(generate_seeds))
        .route("/soullift/seeds/validate", post(validate_candidates))
}
