//! Seed Application Service (Use Case)
//!
//! Orchestrates one seed generation round trip: instruction from the
//! writer's context, completion from the LLM provider, line parsing,
//! and (optionally) structural validation.

use std::sync::Arc;

use soullift::{
    build_seed_instruction, parse_seed_lines, validate_seeds, ChatMessage, CompletionOptions,
    DomainError, LlmProvider, SeedContext,
};

/// Result of one generation round trip
#[derive(Debug, Clone)]
pub struct SeedBatch {
    pub seeds: Vec<String>,
    pub issues: Vec<String>,
    pub provider: String,
    pub model: String,
}

/// Application service for seed generation
pub struct SeedService<P: LlmProvider> {
    provider: Arc<P>,
}

impl<P: LlmProvider> SeedService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Generate seed prompts for the given context.
    ///
    /// With `validate` unset the parsed lines are returned as-is, the
    /// way an ingest caller that re-validates later would want them.
    pub async fn generate(
        &self,
        context: SeedContext,
        validate: bool,
    ) -> Result<SeedBatch, DomainError> {
        let instruction = build_seed_instruction(&context);

        let messages = vec![
            ChatMessage::system(instruction),
            ChatMessage::user("Write the prompts now."),
        ];
        let response = self
            .provider
            .complete(&messages, &CompletionOptions::default())
            .await?;

        let lines = parse_seed_lines(&response.content);

        let (seeds, issues) = if validate {
            let validation = validate_seeds(&lines, context.recipient_name.as_deref());
            (validation.valid, validation.issues)
        } else {
            (lines, Vec::new())
        };

        tracing::info!(
            feeling = %context.core_feeling,
            seeds = seeds.len(),
            issues = issues.len(),
            tokens = response.usage.total_tokens,
            "seed batch generated"
        );

        Ok(SeedBatch {
            seeds,
            issues,
            provider: self.provider.provider_name().to_string(),
            model: response.model,
        })
    }
}
