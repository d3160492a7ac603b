//! The two presentation paths: formatted essays and scoring reports.

use serde::Serialize;

use crate::paragraph::{group_sentences, ESSAY_GROUPING, SECTION_GROUPING};
use crate::sanitize::sanitize;
use crate::section::{detect_sections, HeadingRules, ScoreTone};
use crate::sentence::sentences;

/// Heading over a formatted sample essay.
pub const ESSAY_HEADING: &str = "Generated TOEFL Essay";

/// Heading over a formatted scoring report.
pub const SCORING_HEADING: &str = "Essay Scoring & Analysis";

/// Shown when the essay path cannot produce one substantive paragraph.
pub const UNFORMATTED_PLACEHOLDER: &str = "Essay content could not be properly formatted.";

/// A sample essay ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedEssay {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// A scoring report ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringReport {
    pub heading: String,
    pub sections: Vec<ReportSection>,
}

/// One titled block of a report. `tone` is present only when the title
/// carried a classifiable score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<ScoreTone>,
    pub paragraphs: Vec<String>,
}

/// Shape raw generated text into a displayable essay.
///
/// Sanitized lines are flattened into one flow, split into sentences,
/// and regrouped into three-sentence paragraphs. When that yields
/// nothing substantive the essay is replaced by a placeholder rather
/// than shown ragged.
pub fn format_essay(raw: &str) -> FormattedEssay {
    let clean = sanitize(raw);
    let flow = clean.replace('\n', " ");
    let mut paragraphs = group_sentences(sentences(&flow), ESSAY_GROUPING);

    // Closed groups always clear the floor, so this only fires for the
    // empty and single-short-block cases.
    if paragraphs.iter().all(|p| p.len() <= ESSAY_GROUPING.min_len) {
        paragraphs = vec![UNFORMATTED_PLACEHOLDER.to_string()];
    }

    FormattedEssay {
        heading: ESSAY_HEADING.to_string(),
        paragraphs,
    }
}

/// Shape raw scoring text into a titled report using default heading
/// rules.
pub fn format_scoring(raw: &str) -> ScoringReport {
    format_scoring_with_rules(raw, &HeadingRules::default())
}

/// Shape raw scoring text into a titled report.
///
/// Each detected section's content is flattened and regrouped into
/// two-sentence paragraphs. A section that detected as title-only
/// stays title-only.
pub fn format_scoring_with_rules(raw: &str, rules: &HeadingRules) -> ScoringReport {
    let clean = sanitize(raw);
    let sections = detect_sections(&clean, rules)
        .into_iter()
        .map(|section| {
            let flow = section.content.join(" ");
            ReportSection {
                title: section.title,
                tone: section.tone,
                paragraphs: group_sentences(sentences(&flow), SECTION_GROUPING),
            }
        })
        .collect();

    ScoringReport {
        heading: SCORING_HEADING.to_string(),
        sections,
    }
}
