//! Essay domain - sample generation, rubric scoring, and writing analysis.

pub mod actions;
pub mod prompts;
