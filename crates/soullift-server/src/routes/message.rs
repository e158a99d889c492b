//! Message Routes - Compose the heartfelt message

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;

use crate::models::{ComposeMessageRequest, ComposeMessageResponse};
use crate::AppState;

/// Compose a heartfelt message from the writer's collected material
///
/// POST /soullift/message
#[utoipa::path(
    post,
    path = "/soullift/message",
    request_body = ComposeMessageRequest,
    responses(
        (status = 200, description = "Composed message", body = ComposeMessageResponse),
        (status = 400, description = "Missing core feeling"),
        (status = 503, description = "LLM provider not configured"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Message"
)]
pub async fn compose_message(
    State(state): State<AppState>,
    Json(payload): Json<ComposeMessageRequest>,
) -> Result<Json<ComposeMessageResponse>, (StatusCode, String)> {
    if payload.core_feeling.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "core_feeling must not be empty".to_string(),
        ));
    }

    let service = state.message_service.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "LLM provider not configured".to_string(),
    ))?;

    let composed = service
        .compose(payload.into_outline())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ComposeMessageResponse {
        id: Uuid::new_v4(),
        message: composed.message,
        provider: composed.provider,
        model: composed.model,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/soullift/message", post(compose_message))
}
