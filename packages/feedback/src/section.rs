//! Header detection and section assembly for labeled analysis text.
//!
//! Scoring responses interleave headers ("OVERALL SCORE: 4/5") with
//! free prose. The detector classifies each line with layered
//! heuristics and assembles runs of content under the nearest header
//! above them.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Leading enumerated-list marker ("1.", "12.", ...).
    static ref ENUMERATED: Regex = Regex::new(r"^\d+\.").unwrap();
    /// First run of digits in a title, for score-bearing headers.
    static ref FIRST_NUMBER: Regex = Regex::new(r"\d+").unwrap();
}

/// Title used when no header was detected anywhere in the text.
pub const UNTITLED_SECTION: &str = "Essay Analysis";

/// Heading-detection keyword tables and thresholds.
///
/// These are display heuristics, not a grammar. Keeping them as data
/// lets the keyword set evolve without touching the classifier.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    /// A line containing any of these uppercase phrases is a header.
    pub keywords: Vec<&'static str>,
    /// Headers containing these carry a numeric score worth surfacing.
    pub score_keywords: Vec<&'static str>,
    /// Scores at or above this read as strong.
    pub high_score: i64,
    /// Scores at or below this read as weak.
    pub low_score: i64,
    /// Colon-terminated lines at or past this length are content.
    pub max_header_len: usize,
    /// Enumerated lines at or past this length are content.
    pub max_enumerated_len: usize,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            keywords: vec![
                "OVERALL SCORE",
                "DETAILED ANALYSIS",
                "TASK RESPONSE",
                "ORGANIZATION",
                "LANGUAGE USE",
                "DEVELOPMENT",
                "STRENGTHS",
                "AREAS FOR IMPROVEMENT",
                "JUSTIFICATION",
                "SCORE:",
                "ANALYSIS",
                "WEAKNESS",
                "RECOMMENDATION",
            ],
            score_keywords: vec!["OVERALL SCORE", "SCORE:"],
            high_score: 4,
            low_score: 3,
            max_header_len: 60,
            max_enumerated_len: 80,
        }
    }
}

/// Whether a score-bearing title reads as strong or weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTone {
    High,
    Low,
}

/// A titled run of content lines. The leading run of a response may
/// have content but no title; degenerate input may produce a title and
/// no content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub title: String,
    pub content: Vec<String>,
    pub tone: Option<ScoreTone>,
}

/// Split sanitized text into titled sections.
///
/// Content above the first header is kept as an untitled leading
/// section. The result is never empty: input with no lines at all
/// yields a single generically-titled section.
pub fn detect_sections(clean: &str, rules: &HeadingRules) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section::default();

    for line in clean.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_header(line, rules) {
            if !current.title.is_empty() || !current.content.is_empty() {
                sections.push(current);
            }
            current = Section {
                title: line.to_string(),
                content: Vec::new(),
                tone: score_tone(line, rules),
            };
        } else {
            current.content.push(line.to_string());
        }
    }

    if !current.title.is_empty() || !current.content.is_empty() {
        sections.push(current);
    }

    if sections.is_empty() {
        sections.push(Section {
            title: UNTITLED_SECTION.to_string(),
            ..Section::default()
        });
    }

    sections
}

/// Layered header test: short colon-terminated lines, known keyword
/// phrases, then short enumerated lines.
pub fn is_header(line: &str, rules: &HeadingRules) -> bool {
    if line.ends_with(':') && line.len() < rules.max_header_len {
        return true;
    }
    let upper = line.to_uppercase();
    if rules.keywords.iter().any(|keyword| upper.contains(keyword)) {
        return true;
    }
    ENUMERATED.is_match(line) && line.len() < rules.max_enumerated_len
}

/// Classify the first number in a score-bearing title.
///
/// Titles without a score keyword or without a number get no tone. A
/// digit run that overflows `i64` can only be an enormous value, so it
/// reads as high.
pub fn score_tone(title: &str, rules: &HeadingRules) -> Option<ScoreTone> {
    let upper = title.to_uppercase();
    if !rules.score_keywords.iter().any(|keyword| upper.contains(keyword)) {
        return None;
    }
    let score: i64 = match FIRST_NUMBER.find(&upper)?.as_str().parse() {
        Ok(value) => value,
        Err(_) => return Some(ScoreTone::High),
    };
    if score >= rules.high_score {
        Some(ScoreTone::High)
    } else if score <= rules.low_score {
        Some(ScoreTone::Low)
    } else {
        None
    }
}
