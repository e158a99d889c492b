//! Profile - Key-value writer profile
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile - a single key-value entry in the writer's profile store
/// (e.g. saved recipients, default tone, draft context).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub key: String,
    pub value: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile entry
    pub fn new(key: String, value: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            key,
            value,
            created_at: now,
            updated_at: now,
        }
    }
}
