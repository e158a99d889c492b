//! Seed Generation Context

use serde::{Deserialize, Serialize};

/// Everything the writer has told us about the recipient and the
/// occasion. Constructed fresh per request and never mutated; the
/// builder only reads it.
///
/// `core_feeling` is required by contract but not checked here - the
/// calling layer rejects an empty feeling before the builder runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedContext {
    /// The emotion the writer wants the recipient to feel (e.g. "loved").
    pub core_feeling: String,
    pub tone: Option<String>,
    /// Recipient role, e.g. "Mom" or "best friend".
    pub recipient: Option<String>,
    pub occasion: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_age: Option<u32>,
    pub writer_age: Option<u32>,
}
