//! Seed Generation Models

use serde::{Deserialize, Serialize};
use soullift::{SeedContext, SeedValidation};
use utoipa::ToSchema;
use uuid::Uuid;

/// Generate seed prompts request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateSeedsRequest {
    /// The emotion the writer wants the recipient to feel (required, non-empty)
    pub core_feeling: String,
    pub tone: Option<String>,
    /// Recipient role, e.g. "Mom"
    pub recipient: Option<String>,
    pub occasion: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_age: Option<u32>,
    pub writer_age: Option<u32>,
    /// Run the structural validator on the generated lines (default: true)
    #[serde(default = "default_true")]
    pub validate: bool,
}

fn default_true() -> bool {
    true
}

impl GenerateSeedsRequest {
    pub fn into_context(self) -> SeedContext {
        SeedContext {
            core_feeling: self.core_feeling,
            tone: self.tone,
            recipient: self.recipient,
            occasion: self.occasion,
            recipient_name: self.recipient_name,
            recipient_age: self.recipient_age,
            writer_age: self.writer_age,
        }
    }
}

/// Generated seed batch response
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedsResponse {
    /// Generation id for log correlation
    pub id: Uuid,
    /// Seed prompts, in generation order
    pub seeds: Vec<String>,
    /// Validator diagnostics (empty when validation was skipped or clean)
    pub issues: Vec<String>,
    pub provider: String,
    pub model: String,
}

/// Validate candidate seed lines request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateSeedsRequest {
    pub prompts: Vec<String>,
    pub recipient_name: Option<String>,
}

/// Validation outcome response
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateSeedsResponse {
    /// Lines that passed every rule, input order preserved
    pub valid: Vec<String>,
    /// One diagnostic per violation, in the order found
    pub issues: Vec<String>,
}

impl From<SeedValidation> for ValidateSeedsResponse {
    fn from(validation: SeedValidation) -> Self {
        Self {
            valid: validation.valid,
            issues: validation.issues,
        }
    }
}
