// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for) lives in domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt expecting JSON response (returns raw JSON string)
    /// Parse with serde_json::from_str in calling code
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        // Default implementation calls complete
        self.complete(prompt).await
    }

    /// Complete a prompt with a specific model (returns raw text response)
    /// If model is None, uses the default model
    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Default implementation ignores model and calls complete
        let _ = model;
        self.complete(prompt).await
    }

    /// Complete a prompt expecting JSON response with a specific model
    async fn complete_json_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Default implementation ignores model and calls complete_json
        let _ = model;
        self.complete_json(prompt).await
    }
}
