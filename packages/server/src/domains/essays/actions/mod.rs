//! Essay domain actions.

mod analyze_writing;
mod generate_sample;
mod score_essay;

pub use analyze_writing::analyze_writing;
pub use generate_sample::generate_sample;
pub use score_essay::score_essay;

use thiserror::Error;

/// Failure modes shared by the essay actions.
#[derive(Debug, Error)]
pub enum EssayActionError {
    /// Caller input rejected before any provider work happens.
    #[error(transparent)]
    Validation(#[from] feedback::ValidationError),
    /// The provider call itself failed.
    #[error("AI provider request failed")]
    Provider(#[source] anyhow::Error),
}
