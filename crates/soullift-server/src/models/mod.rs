//! SoulLift API Models
//!
//! Request/response DTOs for the HTTP surface:
//! - Seeds: generation and validation of writing prompts
//! - Message: heartfelt message composition
//! - Profile: key-value writer profile store

mod message;
mod profile;
mod seeds;

pub use message::*;
pub use profile::*;
pub use seeds::*;
