//! Profile Store Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use soullift::Profile;
use utoipa::ToSchema;

/// Put profile entry request
#[derive(Debug, Deserialize, ToSchema)]
pub struct PutProfileRequest {
    /// Arbitrary JSON value stored under the key
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

/// Profile entry response
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            key: profile.key,
            value: profile.value,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
