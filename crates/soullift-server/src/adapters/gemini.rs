//! Gemini implementation of the LlmProvider port
//!
//! Calls the Gemini `generateContent` API over plain HTTPS. System
//! messages map to `systemInstruction`, assistant messages to the
//! "model" role.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use soullift::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, MessageRole,
    TokenUsage,
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini-backed LLM provider
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Creates a new provider using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = build_request(messages, options);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::ExternalService(format!("Gemini request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| DomainError::ExternalService(format!("Gemini parse error: {err}")))?;

        let content = extract_answer(&payload).ok_or_else(|| {
            DomainError::ExternalService("Gemini returned no text candidates".to_string())
        })?;

        Ok(CompletionResponse {
            content,
            model: self.model.clone(),
            usage: extract_usage(&payload),
            finish_reason: extract_finish_reason(&payload),
        })
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_sequences: Option<Vec<String>>,
}

fn build_request(messages: &[ChatMessage], options: &CompletionOptions) -> GenerateContentRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for message in messages {
        match message.role {
            MessageRole::System => system_parts.push(Part {
                text: message.content.clone(),
            }),
            MessageRole::User => contents.push(Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            }),
            MessageRole::Assistant => contents.push(Content {
                role: Some("model".to_string()),
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            }),
        }
    }

    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(Content {
            role: None,
            parts: system_parts,
        })
    };

    GenerateContentRequest {
        contents,
        system_instruction,
        generation_config: GenerationConfig {
            max_output_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
            stop_sequences: options.stop_sequences.clone(),
        },
    }
}

// ============================================
// Response Helpers
// ============================================

fn extract_answer(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

fn extract_usage(root: &Value) -> TokenUsage {
    let metadata = match root.get("usageMetadata") {
        Some(value) => value,
        None => return TokenUsage::default(),
    };

    let count = |key: &str| {
        metadata
            .get(key)
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32
    };

    TokenUsage {
        prompt_tokens: count("promptTokenCount"),
        completion_tokens: count("candidatesTokenCount"),
        total_tokens: count("totalTokenCount"),
    }
}

fn extract_finish_reason(root: &Value) -> Option<String> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("finishReason")?
        .as_str()
        .map(|s| s.to_string())
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExternalService(format!("Gemini API error ({status}): {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_answer_joins_candidate_parts() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "How do you cheer them up?"},
                        {"text": "Why do they mean so much?"}
                    ]
                },
                "finishReason": "STOP"
            }]
        });

        assert_eq!(
            extract_answer(&payload).unwrap(),
            "How do you cheer them up?\nWhy do they mean so much?"
        );
        assert_eq!(extract_finish_reason(&payload).unwrap(), "STOP");
    }

    #[test]
    fn test_extract_answer_none_for_empty_candidates() {
        assert!(extract_answer(&json!({"candidates": []})).is_none());
        assert!(extract_answer(&json!({})).is_none());
    }

    #[test]
    fn test_extract_usage_maps_metadata() {
        let payload = json!({
            "usageMetadata": {
                "promptTokenCount": 120,
                "candidatesTokenCount": 40,
                "totalTokenCount": 160
            }
        });

        let usage = extract_usage(&payload);
        assert_eq!(usage.prompt_tokens, 120);
        assert_eq!(usage.completion_tokens, 40);
        assert_eq!(usage.total_tokens, 160);
    }

    #[test]
    fn test_system_messages_become_system_instruction() {
        let messages = vec![
            ChatMessage::system("instruction text"),
            ChatMessage::user("Write the prompts now."),
        ];
        let request = build_request(&messages, &CompletionOptions::default());

        let system = request.system_instruction.expect("system instruction");
        assert_eq!(system.parts[0].text, "instruction text");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn test_map_http_error_prefers_api_message() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "invalid key"}}"#.to_string(),
        );
        assert!(err.to_string().contains("invalid key"));
    }
}
