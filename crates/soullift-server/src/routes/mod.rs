//! SoulLift API Routes
//!
//! - /soullift/seeds - Seed prompt generation
//! - /soullift/seeds/validate - Structural validation of candidates
//! - /soullift/message - Heartfelt message composition
//! - /soullift/profile - Key-value writer profile store

pub mod message;
pub mod profile;
pub mod seeds;
pub mod swagger;
