//! SoulLift API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for SoulLift
pub struct SoulLiftClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct GenerateSeedsRequest {
    pub core_feeling: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer_age: Option<u32>,
    pub validate: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedsResponse {
    pub id: Uuid,
    pub seeds: Vec<String>,
    pub issues: Vec<String>,
    pub provider: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateSeedsRequest {
    pub prompts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateSeedsResponse {
    pub valid: Vec<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub key: String,
    pub value: serde_json::Value,
}

impl SoulLiftClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate seed prompts
    pub async fn generate_seeds(&self, request: &GenerateSeedsRequest) -> Result<SeedsResponse> {
        let url = format!("{}/soullift/seeds", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let seeds: SeedsResponse = resp.json().await.context("Failed to parse response")?;

        Ok(seeds)
    }

    /// Validate candidate seed lines
    pub async fn validate_seeds(
        &self,
        prompts: Vec<String>,
        recipient_name: Option<String>,
    ) -> Result<ValidateSeedsResponse> {
        let url = format!("{}/soullift/seeds/validate", self.base_url);
        let request = ValidateSeedsRequest {
            prompts,
            recipient_name,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let validation: ValidateSeedsResponse =
            resp.json().await.context("Failed to parse response")?;

        Ok(validation)
    }

    /// Get a profile entry
    pub async fn get_profile(&self, key: &str) -> Result<ProfileResponse> {
        let url = format!("{}/soullift/profile/{}", self.base_url, key);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let profile: ProfileResponse = resp.json().await.context("Failed to parse response")?;

        Ok(profile)
    }

    /// Insert or replace a profile entry
    pub async fn set_profile(&self, key: &str, value: serde_json::Value) -> Result<ProfileResponse> {
        let url = format!("{}/soullift/profile/{}", self.base_url, key);
        let resp = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "value": value }))
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let profile: ProfileResponse = resp.json().await.context("Failed to parse response")?;

        Ok(profile)
    }

    /// Delete a profile entry
    pub async fn delete_profile(&self, key: &str) -> Result<()> {
        let url = format!("{}/soullift/profile/{}", self.base_url, key);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }

    /// List all profile entries
    pub async fn list_profiles(&self) -> Result<Vec<ProfileResponse>> {
        let url = format!("{}/soullift/profile", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to SoulLift API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let profiles: Vec<ProfileResponse> = resp.json().await.context("Failed to parse response")?;

        Ok(profiles)
    }
}
