//! Profile Application Service (Use Case)
//!
//! Thin orchestration over the key-value profile store.

use std::sync::Arc;

use soullift::{DomainError, Profile, ProfileRepository};

/// Application service for profile operations
pub struct ProfileService<R: ProfileRepository> {
    repo: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get a profile entry, erroring when the key is unknown
    pub async fn get(&self, key: &str) -> Result<Profile, DomainError> {
        self.repo
            .find(key)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", key))
    }

    /// Insert or replace the value under `key`
    pub async fn set(&self, key: &str, value: serde_json::Value) -> Result<Profile, DomainError> {
        let profile = self.repo.upsert(key, value).await?;
        tracing::info!(key = %profile.key, "profile entry saved");
        Ok(profile)
    }

    /// Remove an entry; returns whether it existed
    pub async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(key).await?;
        if deleted {
            tracing::info!(key, "profile entry deleted");
        }
        Ok(deleted)
    }

    /// All entries, ordered by key
    pub async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        self.repo.list().await
    }
}
