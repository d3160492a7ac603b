//! Normalization of untrusted LLM writing feedback.
//!
//! Text generation providers return prose with no formatting contract:
//! restated prompts, markdown noise, stray code fences, and an embedded
//! JSON payload that may be malformed or missing entirely. This crate
//! turns such output into reliable values along two independent paths:
//!
//! - **Presentation**: [`format_essay`] and [`format_scoring`] sanitize
//!   the text and rebuild it as display paragraphs and titled sections.
//! - **Structured**: [`analyze_response`] recovers an embedded analysis
//!   payload, completes it against the fixed schema, and degrades to a
//!   deterministic fallback record when nothing parses.
//!
//! Both paths are pure and total. No I/O, no shared state, and no input
//! that fails to produce a well-formed value.

pub mod error;
pub mod extract;
pub mod paragraph;
pub mod render;
pub mod sanitize;
pub mod schema;
pub mod section;
pub mod sentence;

pub use error::{require_essay, require_essay_and_prompt, require_prompt, ValidationError};
pub use extract::{analyze_response, extract_analysis, ExtractOutcome};
pub use paragraph::{group_sentences, GroupingRules, ESSAY_GROUPING, SECTION_GROUPING};
pub use render::{
    format_essay, format_scoring, format_scoring_with_rules, FormattedEssay, ReportSection,
    ScoringReport, ESSAY_HEADING, SCORING_HEADING, UNFORMATTED_PLACEHOLDER,
};
pub use sanitize::sanitize;
pub use schema::{
    complete_analysis, fallback_analysis, OverallAssessment, ParsedAnalysis, WritingAnalysis,
};
pub use section::{detect_sections, HeadingRules, ScoreTone, Section};
pub use sentence::{sentences, Sentences};
