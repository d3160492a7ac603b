//! Analyze writing action - structured feedback with graceful fallback

use tracing::{error, info, warn};

use feedback::{
    complete_analysis, extract_analysis, fallback_analysis, require_essay, ExtractOutcome,
    WritingAnalysis,
};

use super::EssayActionError;
use crate::domains::essays::prompts::format_analysis_prompt;
use crate::kernel::ServerDeps;

/// Produce the structured writing analysis for an essay.
///
/// The provider is asked for the analysis as JSON, but its answer is
/// treated as untrusted text: the payload is recovered from wherever
/// it landed in the response, completed against the fixed schema, and
/// replaced by a deterministic fallback record when nothing parses.
/// Only a failed provider call surfaces as an error.
pub async fn analyze_writing(
    essay: &str,
    deps: &ServerDeps,
) -> Result<WritingAnalysis, EssayActionError> {
    require_essay(essay)?;

    info!(essay_length = essay.len(), "Analyzing essay");

    let request = format_analysis_prompt(essay);
    let raw = deps.ai.complete_json(&request).await.map_err(|e| {
        error!(error = %e, "Writing analysis request failed");
        EssayActionError::Provider(e)
    })?;

    let analysis = match extract_analysis(&raw) {
        ExtractOutcome::Parsed(parsed) => complete_analysis(parsed, essay),
        ExtractOutcome::Unrecoverable => {
            warn!(
                response_length = raw.len(),
                "Analysis response carried no usable payload, serving fallback"
            );
            fallback_analysis(essay)
        }
    };

    Ok(analysis)
}
