//! SoulLift Domain Library
//!
//! Core domain types and interfaces for the SoulLift gift-message backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business logic
//!   - `seeds/`: The seed prompt pipeline (instruction builder, line
//!     parser, structural validator and the shared rule tables)
//!   - `entities/`: Core domain models (Profile)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (LLM provider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use soullift::{SeedContext, build_seed_instruction, validate_seeds};
//! use soullift::{LlmProvider, ProfileRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_seed_instruction, parse_seed_lines, validate_seeds, DomainError, Profile, SeedContext,
    SeedValidation,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole,
    ProfileRepository, TokenUsage,
};
