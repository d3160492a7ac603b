//! Raw provider text cleanup.
//!
//! Generated feedback arrives with no formatting contract: restated
//! prompts, markdown decoration, code fences, bare labels. Everything
//! here is total on arbitrary input; empty in means empty out.

/// Bold labels that mark where a restated prompt ends and the real
/// payload begins. Checked in priority order.
const BOLD_MARKERS: [&str; 2] = ["**Essay:**", "**Prompt:**"];

/// Unformatted essay label. Only honored at the start of a line so a
/// mid-sentence mention stays content.
const BARE_ESSAY_MARKER: &str = "Essay:";

/// Lines shorter than this after markup removal are formatting noise,
/// not prose.
const MIN_CONTENT_LEN: usize = 10;

/// Normalize raw provider output into clean content lines.
///
/// Echoed prompt text before the last payload marker is discarded,
/// code fences are removed, and each surviving line is trimmed,
/// stripped of inline emphasis, and dropped if it is decoration or too
/// short to be prose. Running the result through again changes nothing.
pub fn sanitize(raw: &str) -> String {
    let text = strip_prompt_echo(raw);
    let text = strip_code_fences(text);
    text.lines()
        .filter_map(clean_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep only what follows the restated prompt, when one is present.
///
/// The split lands after the last occurrence of the winning marker, so
/// a prompt that itself quotes the label cannot fool it.
pub fn strip_prompt_echo(text: &str) -> &str {
    for marker in BOLD_MARKERS {
        if let Some(at) = text.rfind(marker) {
            return &text[at + marker.len()..];
        }
    }
    // Scan bare-label candidates right to left until one sits at a
    // line start.
    let mut end = text.len();
    while let Some(at) = text[..end].rfind(BARE_ESSAY_MARKER) {
        if at == 0 || text.as_bytes()[at - 1] == b'\n' {
            return &text[at + BARE_ESSAY_MARKER.len()..];
        }
        end = at;
    }
    text
}

/// Remove triple-backtick fences wherever they appear, JSON language
/// hints included. Unconditional: text without fences passes through
/// with only outer whitespace trimmed.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Drop inline emphasis markers, keeping the wrapped words.
pub fn strip_emphasis(line: &str) -> String {
    line.replace("**", "").replace('*', "").replace('_', "")
}

/// Decoration and label drop rules, shared by both passes over a line.
fn is_noise(line: &str) -> bool {
    line.is_empty()
        || line.starts_with("**")
        || line.starts_with('#')
        || line.starts_with("---")
        || line.starts_with("Essay:")
        || line.starts_with("Prompt:")
}

fn clean_line(line: &str) -> Option<String> {
    let line = line.trim();
    if is_noise(line) {
        return None;
    }
    let line = strip_emphasis(line);
    let line = line.trim();
    // Rechecked after unwrapping: removing emphasis can expose a
    // marker ("_---_ note" becomes "--- note"), and a line the next
    // pass would drop must not survive this one. Length is measured
    // on the unwrapped form for the same reason.
    if is_noise(line) || line.len() < MIN_CONTENT_LEN {
        return None;
    }
    Some(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn passes_plain_prose_through() {
        let text = "Technology has transformed education.\nStudents now learn online.";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n  \n"), "");
    }

    #[test]
    fn drops_text_before_bold_essay_marker() {
        let raw = "Prompt: Discuss the role of technology.\n**Essay:** Technology shapes how students learn today.";
        assert_eq!(sanitize(raw), "Technology shapes how students learn today.");
    }

    #[test]
    fn bold_essay_marker_outranks_prompt_marker() {
        let raw = "**Prompt:** Discuss technology.\n**Essay:**\nTechnology shapes modern classrooms everywhere.";
        assert_eq!(sanitize(raw), "Technology shapes modern classrooms everywhere.");
    }

    #[test]
    fn splits_after_last_marker_occurrence() {
        let raw = "**Essay:** ignored draft text here.\n**Essay:** The final essay body goes here.";
        assert_eq!(sanitize(raw), "The final essay body goes here.");
    }

    #[test]
    fn bare_essay_label_splits_only_at_line_start() {
        let raw = "Here is your task.\nEssay: The bare label also marks the payload.";
        assert_eq!(sanitize(raw), "The bare label also marks the payload.");

        let inline = "The word Essay: appears mid-sentence and stays put.";
        assert_eq!(sanitize(inline), inline);
    }

    #[test]
    fn removes_code_fences_and_language_hints() {
        let raw = "```json\n{\"key\": \"value text long enough\"}\n```";
        assert_eq!(sanitize(raw), "{\"key\": \"value text long enough\"}");
    }

    #[test]
    fn drops_markdown_decoration_lines() {
        let raw = "# Heading\n---\n**Bold label line**\nReal prose stays in the output.";
        assert_eq!(sanitize(raw), "Real prose stays in the output.");
    }

    #[test]
    fn drops_bare_labels_and_prompt_lines() {
        let raw = "Essay:\nPrompt: restated question here\nActual content of the essay body.";
        assert_eq!(sanitize(raw), "Actual content of the essay body.");
    }

    #[test]
    fn unwraps_inline_emphasis() {
        let raw = "This **really** matters for _clarity_ and *flow* overall.";
        assert_eq!(sanitize(raw), "This really matters for clarity and flow overall.");
    }

    #[test]
    fn length_filter_runs_on_unwrapped_text() {
        // Nine characters once the stars come off.
        assert_eq!(sanitize("*a* *b* c"), "");
        // Ten characters survive.
        assert_eq!(sanitize("ten chars."), "ten chars.");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let raw = "**Prompt:** Discuss studying abroad.\n**Essay:**\n# Sample\nStudying abroad *changes* lives.\nEssay:\nshort\nIt builds independence and resilience.\n```\ncode fence residue line here\n```";
        let once = sanitize(raw);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn emphasis_wrapped_markers_are_dropped_not_exposed() {
        // Unwrapping must not leave behind a line a later pass would
        // treat as decoration.
        assert_eq!(sanitize("_---_ and some trailing prose long enough to keep"), "");
        assert_eq!(sanitize("*#* a heading wearing emphasis instead of prose"), "");
        assert_eq!(sanitize("_Essay:_ a label the unwrap would otherwise expose"), "");
    }

    /// One line of the kind of markup-laden output providers produce.
    fn markup_line() -> impl Strategy<Value = String> {
        let prose = "[a-z]{4,9}( [a-z]{4,9}){2,5}\\.";
        prop_oneof![
            prop_oneof![Just("**Essay:**".to_string()), Just("Essay:".to_string())],
            prose.prop_map(|p| format!("**Prompt:** {}", p)),
            prose.prop_map(|p| format!("# {}", p)),
            prop_oneof![Just("---".to_string()), Just(String::new())],
            prose.prop_map(|p| format!("Prompt: {}", p)),
            prop_oneof![Just("```json".to_string()), Just("```".to_string())],
            prose,
            ("[a-z]{3,8}", prose).prop_map(|(w, p)| format!("here *{}* and _{}_", w, p)),
            (
                "[_*]",
                prop_oneof![Just("---"), Just("#"), Just("Essay:"), Just("Prompt:")],
                prose,
            )
                .prop_map(|(wrap, marker, p)| format!("{}{}{} {}", wrap, marker, wrap, p)),
        ]
    }

    proptest! {
        // A second pass over already-clean output changes nothing.
        #[test]
        fn prop_second_pass_changes_nothing(lines in proptest::collection::vec(markup_line(), 1..8)) {
            let once = sanitize(&lines.join("\n"));
            let twice = sanitize(&once);
            prop_assert_eq!(twice, once);
        }

        // Whatever survives the first pass carries no markup at all.
        #[test]
        fn prop_output_is_markup_free(lines in proptest::collection::vec(markup_line(), 1..8)) {
            let once = sanitize(&lines.join("\n"));
            prop_assert!(!once.contains('*'));
            prop_assert!(!once.contains('_'));
            prop_assert!(!once.contains('`'));
            prop_assert!(once.lines().all(|l| !l.starts_with('#') && l.len() >= MIN_CONTENT_LEN));
        }
    }
}
