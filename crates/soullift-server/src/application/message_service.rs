//! Message Application Service (Use Case)
//!
//! Composes the full heartfelt message from the thoughts and
//! descriptor tags the writer collected, via the LLM provider.

use std::sync::Arc;

use soullift::{ChatMessage, CompletionOptions, DomainError, LlmProvider};

/// Everything the writer collected before asking for a draft
#[derive(Debug, Clone)]
pub struct MessageOutline {
    pub core_feeling: String,
    pub thoughts: Vec<String>,
    pub descriptors: Vec<String>,
    pub tone: Option<String>,
    pub recipient: Option<String>,
    pub occasion: Option<String>,
    pub recipient_name: Option<String>,
}

/// Result of one composition round trip
#[derive(Debug, Clone)]
pub struct ComposedMessage {
    pub message: String,
    pub provider: String,
    pub model: String,
}

/// Application service for message composition
pub struct MessageService<P: LlmProvider> {
    provider: Arc<P>,
}

impl<P: LlmProvider> MessageService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn compose(&self, outline: MessageOutline) -> Result<ComposedMessage, DomainError> {
        let instruction = build_message_instruction(&outline);

        let messages = vec![
            ChatMessage::system(instruction),
            ChatMessage::user("Write the message now."),
        ];
        let response = self
            .provider
            .complete(&messages, &CompletionOptions::default())
            .await?;

        let message = response.content.trim().to_string();

        tracing::info!(
            feeling = %outline.core_feeling,
            thoughts = outline.thoughts.len(),
            tokens = response.usage.total_tokens,
            "message composed"
        );

        Ok(ComposedMessage {
            message,
            provider: self.provider.provider_name().to_string(),
            model: response.model,
        })
    }
}

/// Render the composition instruction. Same template-fill idiom as the
/// seed instruction builder; writer material is quoted verbatim.
fn build_message_instruction(outline: &MessageOutline) -> String {
    let mut instruction = format!(
        r#"You are helping someone write a short heartfelt message for a person they care for.
Weave the writer's own thoughts below into one warm, personal message of 3-5 sentences.

Requirements:
- Keep the writer's voice; do not invent facts they did not mention.
- The message should make the recipient feel {feeling}.
- Speak directly to the recipient ("you"). Never use he, she, him, her, his or hers.
- No greetings like "Dear ...", no sign-off, no headings. Plain text only.
"#,
        feeling = outline.core_feeling,
    );

    if !outline.thoughts.is_empty() {
        instruction.push_str("\nThe writer's thoughts:\n");
        for thought in &outline.thoughts {
            instruction.push_str(&format!("- {}\n", thought));
        }
    }

    if !outline.descriptors.is_empty() {
        instruction.push_str(&format!(
            "\nWords the writer uses for them: {}\n",
            outline.descriptors.join(", ")
        ));
    }

    instruction.push_str("\nContext:\n");
    instruction.push_str(&format!("Feeling: {}\n", outline.core_feeling));
    if let Some(tone) = &outline.tone {
        instruction.push_str(&format!("Tone: {}\n", tone));
    }
    if let Some(recipient) = &outline.recipient {
        instruction.push_str(&format!("Recipient: {}\n", recipient));
    }
    if let Some(occasion) = &outline.occasion {
        instruction.push_str(&format!("Occasion: {}\n", occasion));
    }
    if let Some(name) = &outline.recipient_name {
        instruction.push_str(&format!("Recipient Name: {}\n", name));
    }

    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_quotes_writer_material() {
        let outline = MessageOutline {
            core_feeling: "loved".to_string(),
            thoughts: vec!["you always call when it rains".to_string()],
            descriptors: vec!["patient".to_string(), "funny".to_string()],
            tone: Some("warm".to_string()),
            recipient: Some("Mom".to_string()),
            occasion: None,
            recipient_name: Some("Sam".to_string()),
        };
        let instruction = build_message_instruction(&outline);

        assert!(instruction.contains("feel loved"));
        assert!(instruction.contains("- you always call when it rains"));
        assert!(instruction.contains("patient, funny"));
        assert!(instruction.contains("Recipient Name: Sam"));
        assert!(!instruction.contains("Occasion:"));
    }

    #[test]
    fn test_instruction_omits_empty_sections() {
        let outline = MessageOutline {
            core_feeling: "seen".to_string(),
            thoughts: vec![],
            descriptors: vec![],
            tone: None,
            recipient: None,
            occasion: None,
            recipient_name: None,
        };
        let instruction = build_message_instruction(&outline);

        assert!(!instruction.contains("The writer's thoughts:"));
        assert!(!instruction.contains("Words the writer uses"));
        assert!(instruction.contains("Feeling: seen"));
    }
}
