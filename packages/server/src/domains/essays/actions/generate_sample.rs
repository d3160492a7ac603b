//! Generate sample essay action - produces a model answer for a prompt

use tracing::{error, info};

use feedback::{format_essay, require_prompt, FormattedEssay};

use super::EssayActionError;
use crate::domains::essays::prompts::format_generation_prompt;
use crate::kernel::ServerDeps;

/// Generate a full-score sample essay for a writing prompt.
///
/// This action:
/// 1. Rejects a blank prompt before any provider call
/// 2. Asks the provider for a top-rubric sample essay
/// 3. Normalizes the raw response into display paragraphs
///
/// The formatting step is total, so once the provider answers this
/// cannot fail.
pub async fn generate_sample(
    prompt: &str,
    deps: &ServerDeps,
) -> Result<FormattedEssay, EssayActionError> {
    require_prompt(prompt)?;

    info!(prompt_length = prompt.len(), "Generating sample essay");

    let request = format_generation_prompt(prompt);
    let raw = deps.ai.complete(&request).await.map_err(|e| {
        error!(error = %e, "Sample essay generation failed");
        EssayActionError::Provider(e)
    })?;

    let sample = format_essay(&raw);
    info!(
        paragraphs = sample.paragraphs.len(),
        "Sample essay formatted"
    );

    Ok(sample)
}
