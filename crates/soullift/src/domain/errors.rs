//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with key {key}")]
    NotFound { entity_type: String, key: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, key: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            key: key.to_string(),
        }
    }
}
