//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains the seed pipeline, entities and errors.

pub mod entities;
pub mod errors;
pub mod seeds;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use seeds::*;
