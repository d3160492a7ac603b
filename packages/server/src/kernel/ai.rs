// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::openai;

use super::BaseAI;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIClient {
    client: openai::Client,
    /// Model used when the caller does not name one (OPENAI_MODEL).
    default_model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, default_model: String) -> Self {
        let client = openai::Client::new(&api_key);
        Self {
            client,
            default_model,
        }
    }
}

#[async_trait]
impl BaseAI for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_json(&self, prompt: &str) -> Result<String> {
        self.complete_json_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let model_id = model.unwrap_or(self.default_model.as_str());

        tracing::debug!(
            prompt_length = prompt.len(),
            model = model_id,
            "Building OpenAI agent for completion"
        );

        let agent = self
            .client
            .agent(model_id)
            .preamble("You are a helpful assistant.")
            .max_tokens(4096)
            .build();

        tracing::info!(model = model_id, "Calling OpenAI API");

        let response = agent
            .prompt(prompt)
            .await
            .map_err(|e| {
                let prompt_preview: String = prompt.chars().take(200).collect();
                tracing::error!(
                    error = %e,
                    model = model_id,
                    prompt_preview = %prompt_preview,
                    "OpenAI API call failed"
                );
                e
            })
            .context("Failed to call OpenAI API")?;

        tracing::info!(
            response_length = response.len(),
            model = model_id,
            "OpenAI API response received"
        );

        Ok(response)
    }

    async fn complete_json_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Same as complete_with_model for OpenAI; the prompts themselves
        // instruct the model to return bare JSON
        self.complete_with_model(prompt, model).await
    }
}
