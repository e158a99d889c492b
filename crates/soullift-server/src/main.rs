use axum::{routing::get, Json, Router};
use serde::Serialize;
use soullift::LlmProvider;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{GeminiProvider, PgProfileRepository};
use application::{MessageService, ProfileService, SeedService};

/// Type aliases for application services with concrete implementations
pub type AppSeedService = SeedService<GeminiProvider>;
pub type AppMessageService = MessageService<GeminiProvider>;
pub type AppProfileService = ProfileService<PgProfileRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub seed_service: Option<Arc<AppSeedService>>,
    pub message_service: Option<Arc<AppMessageService>>,
    pub profile_service: Arc<AppProfileService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "SoulLift API is running - every message starts with a seed".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("SoulLift API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Initialize the LLM provider if configured
    let provider = secrets.get("GEMINI_API_KEY").map(|key| {
        let provider = match secrets.get("GEMINI_MODEL") {
            Some(model) => GeminiProvider::new(key).with_model(model),
            None => GeminiProvider::new(key),
        };
        tracing::info!(model = provider.model_id(), "LLM provider initialized (Gemini)");
        Arc::new(provider)
    });

    if provider.is_none() {
        tracing::warn!("No GEMINI_API_KEY set - seed and message generation disabled");
    }

    // Initialize application services
    let profile_repo = Arc::new(PgProfileRepository::new(pool));
    let profile_service = Arc::new(ProfileService::new(profile_repo));
    let seed_service = provider
        .as_ref()
        .map(|p| Arc::new(SeedService::new(p.clone())));
    let message_service = provider
        .as_ref()
        .map(|p| Arc::new(MessageService::new(p.clone())));

    // Create application state
    let state = AppState {
        seed_service,
        message_service,
        profile_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::seeds::router())
        .merge(routes::message::router())
        .merge(routes::profile::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("SoulLift API ready");

    Ok(router.into())
}
