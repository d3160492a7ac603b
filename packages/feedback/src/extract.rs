//! Recovering an embedded JSON payload from untrusted provider text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::sanitize::strip_code_fences;
use crate::schema::{complete_analysis, fallback_analysis, ParsedAnalysis, WritingAnalysis};

lazy_static! {
    /// Ordered extraction attempts, strictest first: a brace pair on a
    /// single line, then a greedy pair spanning newlines.
    static ref OBJECT_PATTERNS: [Regex; 2] = [
        Regex::new(r"\{.*\}").unwrap(),
        Regex::new(r"(?s)\{.*\}").unwrap(),
    ];
}

/// What searching a response for a structured payload produced.
///
/// Absence is an expected outcome here, not an error. Callers match
/// and degrade to a synthesized record.
#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    /// Some candidate substring parsed as an analysis payload.
    Parsed(ParsedAnalysis),
    /// No pattern yielded a candidate that parses.
    Unrecoverable,
}

impl ExtractOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ExtractOutcome::Parsed(_))
    }
}

/// Locate and parse a brace-delimited analysis payload in `raw`.
///
/// Code fences come off first, then each pattern gets one shot at
/// producing a candidate. The first candidate that deserializes wins;
/// a candidate that fails only moves the search to the next pattern.
pub fn extract_analysis(raw: &str) -> ExtractOutcome {
    let stripped = strip_code_fences(raw);

    for pattern in OBJECT_PATTERNS.iter() {
        if let Some(candidate) = pattern.find(&stripped) {
            match serde_json::from_str::<ParsedAnalysis>(candidate.as_str()) {
                Ok(parsed) => return ExtractOutcome::Parsed(parsed),
                Err(error) => {
                    debug!(%error, pattern = pattern.as_str(), "candidate payload failed to parse");
                }
            }
        }
    }

    ExtractOutcome::Unrecoverable
}

/// Full structured-data path: extract, then complete or fall back.
///
/// Never fails. A response with no recoverable payload produces the
/// deterministic fallback record for `essay`.
pub fn analyze_response(raw: &str, essay: &str) -> WritingAnalysis {
    match extract_analysis(raw) {
        ExtractOutcome::Parsed(parsed) => complete_analysis(parsed, essay),
        ExtractOutcome::Unrecoverable => {
            debug!(
                response_len = raw.len(),
                "no structured payload recovered, synthesizing fallback"
            );
            fallback_analysis(essay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_json_object() {
        let raw = r#"{"suggestions": ["Add more transitions"]}"#;
        match extract_analysis(raw) {
            ExtractOutcome::Parsed(parsed) => {
                assert_eq!(parsed.suggestions, vec!["Add more transitions"]);
            }
            ExtractOutcome::Unrecoverable => panic!("expected a parsed payload"),
        }
    }

    #[test]
    fn parses_json_inside_surrounding_prose() {
        let raw = r#"Here is your analysis: {"grammar_issues": []} Hope it helps!"#;
        assert!(extract_analysis(raw).is_parsed());
    }

    #[test]
    fn parses_fenced_multiline_json() {
        let raw = "```json\n{\n  \"suggestions\": [\n    \"Work on cohesion\"\n  ]\n}\n```";
        match extract_analysis(raw) {
            ExtractOutcome::Parsed(parsed) => {
                assert_eq!(parsed.suggestions, vec!["Work on cohesion"]);
            }
            ExtractOutcome::Unrecoverable => panic!("expected a parsed payload"),
        }
    }

    #[test]
    fn multiline_pattern_rescues_what_single_line_missed() {
        let raw = "{\n\"transitions\": []\n}";
        assert!(extract_analysis(raw).is_parsed());
    }

    #[test]
    fn prose_without_braces_is_unrecoverable() {
        assert!(!extract_analysis("A thoughtful essay about technology.").is_parsed());
    }

    #[test]
    fn malformed_json_is_unrecoverable() {
        assert!(!extract_analysis(r#"{"suggestions": ["unterminated"#).is_parsed());
    }

    #[test]
    fn mistyped_candidate_fails_every_pattern() {
        // Both patterns find the same braces; neither candidate
        // deserializes, so the outcome is unrecoverable.
        assert!(!extract_analysis(r#"{"suggestions": "not a list"}"#).is_parsed());
    }

    #[test]
    fn empty_input_is_unrecoverable() {
        assert!(!extract_analysis("").is_parsed());
    }

    #[test]
    fn analyze_completes_a_recovered_payload() {
        let raw = r#"{"suggestions": ["One tip"], "overall_assessment": {"word_count_feedback": "Fine", "essay_structure": "Solid", "argument_strength": "Good", "estimated_toefl_band": "4"}}"#;
        let analysis = analyze_response(raw, "The essay text.");
        assert_eq!(analysis.suggestions.len(), 3);
        assert_eq!(analysis.suggestions[0], "One tip");
        assert_eq!(analysis.overall_assessment.estimated_toefl_band, "4");
    }

    #[test]
    fn analyze_falls_back_when_nothing_parses() {
        let essay = "Short essay body.";
        let analysis = analyze_response("No JSON anywhere in this reply.", essay);
        assert_eq!(analysis, crate::schema::fallback_analysis(essay));
    }
}
