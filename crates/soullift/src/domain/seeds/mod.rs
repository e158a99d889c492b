//! Seed Prompt Pipeline
//!
//! "Seeds" are short candidate phrases that inspire the writer to put
//! words to what someone means to them. The pipeline has three pure
//! stages: build a constrained LLM instruction from the writer's
//! context, split the raw model output into candidate lines, and
//! filter those lines against the structural contract.

pub mod builder;
pub mod context;
pub mod parser;
pub mod rules;
pub mod validator;

pub use builder::build_seed_instruction;
pub use context::SeedContext;
pub use parser::parse_seed_lines;
pub use validator::{validate_seeds, SeedValidation};
