//! External Service Ports

mod llm_provider;

pub use llm_provider::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
