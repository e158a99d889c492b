//! Message Composition Models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::MessageOutline;

/// Compose message request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ComposeMessageRequest {
    /// The emotion the writer wants the recipient to feel (required, non-empty)
    pub core_feeling: String,
    /// Freeform thoughts the writer collected
    #[serde(default)]
    pub thoughts: Vec<String>,
    /// Descriptor tags, e.g. "patient", "funny"
    #[serde(default)]
    pub descriptors: Vec<String>,
    pub tone: Option<String>,
    pub recipient: Option<String>,
    pub occasion: Option<String>,
    pub recipient_name: Option<String>,
}

impl ComposeMessageRequest {
    pub fn into_outline(self) -> MessageOutline {
        MessageOutline {
            core_feeling: self.core_feeling,
            thoughts: self.thoughts,
            descriptors: self.descriptors,
            tone: self.tone,
            recipient: self.recipient,
            occasion: self.occasion,
            recipient_name: self.recipient_name,
        }
    }
}

/// Composed message response
#[derive(Debug, Serialize, ToSchema)]
pub struct ComposeMessageResponse {
    /// Composition id for log correlation
    pub id: Uuid,
    pub message: String,
    pub provider: String,
    pub model: String,
}
