//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod message_service;
mod profile_service;
mod seed_service;

pub use message_service::{ComposedMessage, MessageOutline, MessageService};
pub use profile_service::ProfileService;
pub use seed_service::{SeedBatch, SeedService};
