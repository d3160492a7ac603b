//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

/// GPT-4o Mini - cost-effective model used when OPENAI_MODEL is not
/// configured.
pub const GPT_4O_MINI: &str = "gpt-4o-mini";

pub use ai::OpenAIClient;
pub use deps::ServerDeps;
pub use test_dependencies::MockAI;
pub use traits::*;
