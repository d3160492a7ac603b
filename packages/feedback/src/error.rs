//! Boundary validation for caller-supplied input.
//!
//! The pipeline itself is total, so the only failures this library
//! defines are rejections of missing input, raised before any provider
//! call is made. Display strings are part of the API surface.

use thiserror::Error;

/// Rejected caller input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Essay text is required")]
    MissingEssay,
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("Essay text and prompt are required")]
    MissingEssayAndPrompt,
}

/// Require a non-blank prompt for the sample path.
pub fn require_prompt(prompt: &str) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        Err(ValidationError::MissingPrompt)
    } else {
        Ok(())
    }
}

/// Require a non-blank essay for the analysis path.
pub fn require_essay(essay: &str) -> Result<(), ValidationError> {
    if essay.trim().is_empty() {
        Err(ValidationError::MissingEssay)
    } else {
        Ok(())
    }
}

/// Require both fields for the scoring path. Either one missing rejects
/// the pair with a single combined message.
pub fn require_essay_and_prompt(essay: &str, prompt: &str) -> Result<(), ValidationError> {
    if essay.trim().is_empty() || prompt.trim().is_empty() {
        Err(ValidationError::MissingEssayAndPrompt)
    } else {
        Ok(())
    }
}
