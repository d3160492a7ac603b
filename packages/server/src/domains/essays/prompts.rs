//! LLM prompts for the essay domain.
//!
//! All three prompts are tuned against the official TOEFL Independent
//! Writing rubric. Responses come back as free text; nothing downstream
//! assumes anything about their formatting.

/// Prompt for generating a full-score sample essay.
pub const GENERATION_PROMPT: &str = r#"You are an expert TOEFL writing instructor and rater.

Please write a **high-scoring TOEFL Independent Writing essay** (maximum score: 5) based on the following writing prompt. The essay should demonstrate the qualities of a top-scoring response according to the official TOEFL scoring rubric.

### TOEFL Independent Writing Prompt:
{prompt}

### Scoring Criteria:
- **Development**: The essay presents a clear and well-supported position.
- **Organization**: Ideas are logically ordered and fully developed with clear transitions.
- **Language Use**: Displays consistent control of grammatical structures and vocabulary, with minimal errors.
- **Mechanics**: Correct spelling, punctuation, and sentence formation.
- **Length**: Around 350-400 words.

Generate an essay that would receive a full score (5/5) from TOEFL raters."#;

/// Prompt for scoring an essay against the rubric.
pub const SCORING_PROMPT: &str = r#"You are an expert TOEFL writing rater. Please evaluate the following essay based on the official TOEFL Independent Writing scoring rubric.

### Original Writing Prompt:
{prompt}

### Essay to Score:
{essay}

### TOEFL Scoring Rubric (Scale: 0-5):

**Score 5 (Excellent):** Effectively addresses the topic and task; well organized and well developed with clearly appropriate explanations and details; displays unity, progression, and coherence; consistent facility in the use of language with syntactic variety and range of vocabulary.

**Score 4 (Good):** Addresses the topic and task well, though some points may not be fully elaborated; generally well organized and developed; may contain occasional redundancy, digression, or unclear connections; occasional noticeable minor errors.

**Score 3 (Fair):** Addresses the topic and task using somewhat developed explanations and details; connection of ideas may be occasionally obscured; inconsistent facility in sentence formation and word choice.

**Score 2 (Limited):** Limited development in response to the topic and task; inadequate organization or connection of ideas; insufficient examples or details; an accumulation of errors in sentence structure and usage.

**Score 1 (Seriously Flawed):** Serious disorganization or underdevelopment; little or no detail, or irrelevant specifics; serious and frequent errors in sentence structure or usage.

Please provide:
1. **Overall Score** (0-5)
2. **Detailed Analysis** for each criterion:
   - Task Response (how well it addresses the prompt)
   - Organization (structure, coherence, transitions)
   - Language Use (vocabulary, sentence variety, grammar)
   - Development (examples, explanations, details)
3. **Strengths** of the essay
4. **Areas for Improvement**
5. **Justification** for the score given

Format your response clearly with section headers."#;

/// Prompt for structured writing analysis. The JSON block is the wire
/// contract; the analysis schema deserializes exactly these fields.
pub const ANALYSIS_PROMPT: &str = r#"You are a world-class TOEFL writing instructor and educational technology expert with over 15 years of experience. Your task is to provide comprehensive, real-time feedback on student writing with the precision and expertise of official ETS TOEFL raters.

### Essay Text to Analyze:
"{essay}"

### Analysis Requirements:
Please provide detailed, educational feedback in the following JSON structure. Be thorough, specific, pedagogically sound, and encourage student improvement.

{
    "spelling_errors": [
        {"word": "misspelled_word", "suggestions": ["correct1", "correct2", "correct3"], "position": 45, "context": "surrounding sentence context", "severity": "high|medium|low"}
    ],
    "grammar_issues": [
        {"issue": "Subject-verb agreement error", "text": "exact problematic phrase", "suggestion": "corrected version", "position": 120, "severity": "high|medium|low", "explanation": "Detailed explanation of the grammar rule"}
    ],
    "vocabulary_highlights": [
        {"word": "sophisticated_word", "reason": "Demonstrates advanced academic vocabulary", "position": 200, "type": "academic|advanced|precise|domain-specific", "toefl_level": "high|medium"}
    ],
    "sentence_structure": [
        {"text": "complex sentence example", "feedback": "Excellent use of subordinate clauses", "position": 300, "type": "complex|compound|compound-complex|varied", "toefl_score_impact": "positive|neutral"}
    ],
    "transitions": [
        {"text": "transition phrase", "feedback": "Effectively connects ideas between paragraphs", "position": 150, "type": "excellent|good|adequate", "function": "contrast|addition|conclusion|causation|comparison|temporal"}
    ],
    "weaknesses": [
        {"text": "problematic phrase or sentence", "issue": "Unclear pronoun reference", "suggestion": "Specific, actionable improvement advice", "position": 400, "impact": "clarity|coherence|vocabulary|grammar|flow"}
    ],
    "strengths": [
        {"text": "excellent phrase/sentence", "reason": "Demonstrates clear argumentation", "position": 250, "category": "argumentation|vocabulary|structure|development|clarity"}
    ],
    "coherence_analysis": [
        {"issue": "Missing logical connection between ideas", "suggestion": "Add transitional phrase to clarify relationship", "paragraph": 2, "severity": "high|medium|low"}
    ],
    "development_feedback": [
        {"aspect": "examples|details|elaboration|support|explanation", "comment": "Specific observation about idea development", "suggestion": "Concrete advice for improvement"}
    ],
    "toefl_specific_tips": [
        {"category": "task_response|organization|language_use|development", "tip": "TOEFL-specific strategic advice", "priority": "high|medium|low"}
    ],
    "suggestions": [
        "Prioritized, actionable improvement suggestions that will have the most impact on TOEFL score"
    ],
    "overall_assessment": {
        "word_count_feedback": "Assessment of word count appropriateness for TOEFL (aim for 300-400 words)",
        "essay_structure": "Analysis of introduction-body-conclusion structure and paragraph organization",
        "argument_strength": "Assessment of argument development, position clarity, and supporting evidence quality",
        "estimated_toefl_band": "Estimated score range 1-5 with detailed justification based on TOEFL rubric"
    }
}

### Analysis Focus Areas:
- Language mechanics: spelling, subject-verb agreement, verb tense consistency, article and preposition usage, word forms, pronoun reference
- Vocabulary: academic sophistication, word choice precision, collocation accuracy, variety, register appropriateness
- Sentence structure: variety across simple, compound, and complex forms; fragment and run-on detection; punctuation
- Coherence and cohesion: logical progression, transition usage, paragraph unity, discourse markers
- Task response: clear thesis, argument development depth, supporting example relevance, topic adherence

### Quality Standards:
- Provide specific, actionable feedback with clear examples
- Include educational explanations, not just corrections
- Prioritize errors by severity and TOEFL score impact
- Balance encouragement with constructive criticism

Return ONLY the JSON object with comprehensive analysis. Ensure all fields are properly filled with relevant, specific feedback. No additional text, markdown, or explanations outside the JSON structure."#;

/// Format the generation prompt with the writing prompt.
pub fn format_generation_prompt(prompt: &str) -> String {
    GENERATION_PROMPT.replace("{prompt}", prompt)
}

/// Format the scoring prompt with the original prompt and essay.
pub fn format_scoring_prompt(prompt: &str, essay: &str) -> String {
    SCORING_PROMPT
        .replace("{prompt}", prompt)
        .replace("{essay}", essay)
}

/// Format the analysis prompt with the essay text.
pub fn format_analysis_prompt(essay: &str) -> String {
    ANALYSIS_PROMPT.replace("{essay}", essay)
}
