//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ComposeMessageRequest,
    ComposeMessageResponse,
    GenerateSeedsRequest,
    ProfileResponse,
    PutProfileRequest,
    SeedsResponse,
    ValidateSeedsRequest,
    ValidateSeedsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Seed endpoints
        super::seeds::generate_seeds,
        super::seeds::validate_candidates,
        // Message endpoints
        super::message::compose_message,
        // Profile endpoints
        super::profile::list_profiles,
        super::profile::get_profile,
        super::profile::put_profile,
        super::profile::delete_profile,
    ),
    info(
        title = "SoulLift API",
        version = "0.2.0",
        description = "SoulLift - heartfelt message backend\n\nGenerates constrained writing-prompt seeds, validates them against the structural contract, and composes the final message.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Seeds", description = "Seed prompts - generation and structural validation"),
        (name = "Message", description = "Message - heartfelt message composition"),
        (name = "Profile", description = "Profile - key-value writer profile store"),
    ),
    components(
        schemas(
            // Seeds
            GenerateSeedsRequest,
            SeedsResponse,
            ValidateSeedsRequest,
            ValidateSeedsResponse,
            // Message
            ComposeMessageRequest,
            ComposeMessageResponse,
            // Profile
            PutProfileRequest,
            ProfileResponse,
        )
    ),
)]
pub struct ApiDoc;
