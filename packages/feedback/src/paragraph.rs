//! Grouping sentence units into display paragraphs.

/// How many sentences a paragraph aims for and how short its joined
/// text may not be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingRules {
    pub target_sentences: usize,
    pub min_len: usize,
}

/// Essay bodies read best in threes, with a modest length floor.
pub const ESSAY_GROUPING: GroupingRules = GroupingRules {
    target_sentences: 3,
    min_len: 50,
};

/// Analysis sections use tighter two-sentence groups with a higher
/// length bar.
pub const SECTION_GROUPING: GroupingRules = GroupingRules {
    target_sentences: 2,
    min_len: 80,
};

/// Join sentence units into paragraphs under `rules`.
///
/// A group closes once it reaches `target_sentences` units and its
/// joined text exceeds `min_len`; an under-length group keeps
/// accumulating instead. Leftover units at the end never disappear: a
/// qualifying tail becomes its own paragraph, a short tail is folded
/// into the previous one, and when nothing closed at all the whole
/// input comes back as a single block.
pub fn group_sentences<'a, I>(units: I, rules: GroupingRules) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut paragraphs: Vec<String> = Vec::new();
    let mut group: Vec<&str> = Vec::new();

    for unit in units {
        group.push(unit);
        if group.len() >= rules.target_sentences {
            let joined = group.join(" ");
            if joined.len() > rules.min_len {
                paragraphs.push(joined);
                group.clear();
            }
        }
    }

    if !group.is_empty() {
        let joined = group.join(" ");
        if joined.len() > rules.min_len || paragraphs.is_empty() {
            paragraphs.push(joined);
        } else if let Some(last) = paragraphs.last_mut() {
            last.push(' ');
            last.push_str(&joined);
        }
    }

    paragraphs
}
