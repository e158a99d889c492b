//! Profile Repository Port
//!
//! Abstract interface for the writer's key-value profile store.
//! SoulLift deliberately keeps persistence to this one flat store.

use async_trait::async_trait;

use crate::domain::entities::Profile;
use crate::domain::errors::DomainError;

/// Key-value profile store interface
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Look up a single entry by key
    async fn find(&self, key: &str) -> Result<Option<Profile>, DomainError>;

    /// Insert or replace the value under `key`
    async fn upsert(&self, key: &str, value: serde_json::Value) -> Result<Profile, DomainError>;

    /// Remove an entry; returns whether it existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// All entries, ordered by key
    async fn list(&self) -> Result<Vec<Profile>, DomainError>;
}
