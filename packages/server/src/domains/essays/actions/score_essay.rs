//! Score essay action - rubric evaluation rendered as a sectioned report

use tracing::{error, info};

use feedback::{format_scoring, require_essay_and_prompt, ScoringReport};

use super::EssayActionError;
use crate::domains::essays::prompts::format_scoring_prompt;
use crate::kernel::ServerDeps;

/// Score an essay against the rubric and shape the result for display.
///
/// Both the essay and its original prompt are required; the rater
/// cannot judge task response without knowing the task. The raw rubric
/// commentary is normalized into titled sections with score tone.
pub async fn score_essay(
    essay: &str,
    prompt: &str,
    deps: &ServerDeps,
) -> Result<ScoringReport, EssayActionError> {
    require_essay_and_prompt(essay, prompt)?;

    info!(
        essay_length = essay.len(),
        prompt_length = prompt.len(),
        "Scoring essay"
    );

    let request = format_scoring_prompt(prompt, essay);
    let raw = deps.ai.complete(&request).await.map_err(|e| {
        error!(error = %e, "Essay scoring failed");
        EssayActionError::Provider(e)
    })?;

    let report = format_scoring(&raw);
    info!(sections = report.sections.len(), "Scoring report formatted");

    Ok(report)
}
