//! The fixed writing-analysis schema, completion, and fallback.
//!
//! Two types carry the same shape on purpose. [`ParsedAnalysis`] is
//! the lenient wire form: every field defaulted so a partial payload
//! still deserializes. [`WritingAnalysis`] is the guaranteed form
//! callers consume: every list present, the assessment always
//! populated. [`complete_analysis`] is the only way across.

use serde::{Deserialize, Serialize};

/// One misspelled word with correction candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellingFinding {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub severity: String,
}

/// One grammar problem with a suggested rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarFinding {
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub explanation: String,
}

/// A word worth calling out, favorably or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyHighlight {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub toefl_level: String,
}

/// Feedback on one sentence's construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceStructureNote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub toefl_score_impact: String,
}

/// A transition word or phrase and how well it works.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionNote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub function: String,
}

/// A passage that weakens the essay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaknessNote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub impact: String,
}

/// A passage that strengthens the essay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthNote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub category: String,
}

/// A paragraph-level coherence problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoherenceNote {
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub paragraph: u64,
    #[serde(default)]
    pub severity: String,
}

/// Commentary on how one aspect of the essay is developed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentNote {
    #[serde(default)]
    pub aspect: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub suggestion: String,
}

/// An exam-strategy tip with a priority label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyTip {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tip: String,
    #[serde(default)]
    pub priority: String,
}

/// Essay-level verdicts. Always present in a completed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    #[serde(default)]
    pub word_count_feedback: String,
    #[serde(default)]
    pub essay_structure: String,
    #[serde(default)]
    pub argument_strength: String,
    #[serde(default)]
    pub estimated_toefl_band: String,
}

/// Lenient wire form of an analysis payload.
///
/// Any JSON object deserializes into this; unknown fields are ignored
/// and missing ones default. Mistyped fields still fail, which is what
/// lets the extractor reject non-analysis candidates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedAnalysis {
    #[serde(default)]
    pub spelling_errors: Vec<SpellingFinding>,
    #[serde(default)]
    pub grammar_issues: Vec<GrammarFinding>,
    #[serde(default)]
    pub vocabulary_highlights: Vec<VocabularyHighlight>,
    #[serde(default)]
    pub sentence_structure: Vec<SentenceStructureNote>,
    #[serde(default)]
    pub transitions: Vec<TransitionNote>,
    #[serde(default)]
    pub weaknesses: Vec<WeaknessNote>,
    #[serde(default)]
    pub strengths: Vec<StrengthNote>,
    #[serde(default)]
    pub coherence_analysis: Vec<CoherenceNote>,
    #[serde(default)]
    pub development_feedback: Vec<DevelopmentNote>,
    #[serde(default)]
    pub toefl_specific_tips: Vec<StrategyTip>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub overall_assessment: Option<OverallAssessment>,
}

/// The completed analysis record. Field names and order are the wire
/// contract; clients bind to them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingAnalysis {
    pub spelling_errors: Vec<SpellingFinding>,
    pub grammar_issues: Vec<GrammarFinding>,
    pub vocabulary_highlights: Vec<VocabularyHighlight>,
    pub sentence_structure: Vec<SentenceStructureNote>,
    pub transitions: Vec<TransitionNote>,
    pub weaknesses: Vec<WeaknessNote>,
    pub strengths: Vec<StrengthNote>,
    pub coherence_analysis: Vec<CoherenceNote>,
    pub development_feedback: Vec<DevelopmentNote>,
    pub toefl_specific_tips: Vec<StrategyTip>,
    pub suggestions: Vec<String>,
    pub overall_assessment: OverallAssessment,
}

/// Appended one at a time when the provider sends fewer than
/// [`MIN_SUGGESTIONS`].
pub const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Vary your sentence structures to demonstrate language proficiency",
    "Include specific examples to support your main arguments",
    "Use transition words to improve coherence between paragraphs",
];

/// Floor on how many suggestions a completed record carries.
pub const MIN_SUGGESTIONS: usize = 3;

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rough sentence count: non-blank segments between periods.
pub fn sentence_count(text: &str) -> usize {
    text.split('.').filter(|part| !part.trim().is_empty()).count()
}

/// Promote a parsed payload to a completed record.
///
/// Suggestions are padded up to the floor with generic ones, and a
/// missing assessment is replaced by pending verdicts built from the
/// essay's word count. Populated fields pass through untouched.
pub fn complete_analysis(parsed: ParsedAnalysis, essay: &str) -> WritingAnalysis {
    let mut suggestions = parsed.suggestions;
    let mut generic = GENERIC_SUGGESTIONS.iter();
    while suggestions.len() < MIN_SUGGESTIONS {
        match generic.next() {
            Some(suggestion) => suggestions.push((*suggestion).to_string()),
            None => break,
        }
    }

    let overall_assessment = parsed.overall_assessment.unwrap_or_else(|| OverallAssessment {
        word_count_feedback: format!("Current word count: {} words", word_count(essay)),
        essay_structure: "Structure analysis pending".to_string(),
        argument_strength: "Argument development assessment pending".to_string(),
        estimated_toefl_band: "Analysis in progress".to_string(),
    });

    WritingAnalysis {
        spelling_errors: parsed.spelling_errors,
        grammar_issues: parsed.grammar_issues,
        vocabulary_highlights: parsed.vocabulary_highlights,
        sentence_structure: parsed.sentence_structure,
        transitions: parsed.transitions,
        weaknesses: parsed.weaknesses,
        strengths: parsed.strengths,
        coherence_analysis: parsed.coherence_analysis,
        development_feedback: parsed.development_feedback,
        toefl_specific_tips: parsed.toefl_specific_tips,
        suggestions,
        overall_assessment,
    }
}

/// Synthesize a full record from essay statistics alone.
///
/// Used when no structured payload could be recovered. Deterministic:
/// the same essay always produces the same record, so a flaky provider
/// degrades to stable feedback instead of an error.
pub fn fallback_analysis(essay: &str) -> WritingAnalysis {
    let words = word_count(essay);
    let sentences = sentence_count(essay);

    let length_verdict = if (300..=500).contains(&words) {
        "Good length"
    } else if words < 300 {
        "Consider expanding"
    } else {
        "Consider condensing"
    };

    let development_suggestion = if words < 300 {
        "Aim for 300-400 words for optimal TOEFL scoring"
    } else {
        "Good word count for TOEFL requirements"
    };

    WritingAnalysis {
        spelling_errors: Vec::new(),
        grammar_issues: Vec::new(),
        vocabulary_highlights: Vec::new(),
        sentence_structure: Vec::new(),
        transitions: Vec::new(),
        weaknesses: Vec::new(),
        strengths: vec![StrengthNote {
            text: "essay completion".to_string(),
            reason: "Successfully completed the writing task".to_string(),
            position: 0,
            category: "task_completion".to_string(),
        }],
        coherence_analysis: Vec::new(),
        development_feedback: vec![DevelopmentNote {
            aspect: "word_count".to_string(),
            comment: format!("Your essay contains {} words", words),
            suggestion: development_suggestion.to_string(),
        }],
        toefl_specific_tips: vec![StrategyTip {
            category: "general".to_string(),
            tip: "Continue writing to receive detailed AI feedback on your essay".to_string(),
            priority: "medium".to_string(),
        }],
        suggestions: vec![
            "Keep writing to unlock detailed AI analysis".to_string(),
            "Aim for clear paragraph structure with topic sentences".to_string(),
            "Use specific examples to support your arguments".to_string(),
            "Include transition words to connect your ideas".to_string(),
        ],
        overall_assessment: OverallAssessment {
            word_count_feedback: format!("Current word count: {} words - {}", words, length_verdict),
            essay_structure: format!("Basic structure assessment: {} sentences detected", sentences),
            argument_strength: "Argument development will be analyzed with more content".to_string(),
            estimated_toefl_band: "Estimated score available after comprehensive analysis".to_string(),
        },
    }
}
