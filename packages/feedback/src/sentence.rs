//! Sentence boundary splitting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A sentence ends at `.`, `!`, or `?` followed by whitespace.
    static ref BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Lazily split `text` into trimmed sentence units.
///
/// Terminal punctuation stays attached to the sentence on its left.
/// Trailing text with no terminator is still yielded as a final unit,
/// so no content is ever dropped. The iterator borrows its input and
/// is `Clone`, which lets callers walk the same text twice without
/// re-allocating.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

/// Iterator state for [`sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let (raw, advance) = match BOUNDARY.find(rest) {
                // One past the match start keeps the punctuation byte
                // inside the unit; the whitespace run is consumed.
                Some(m) => (&rest[..m.start() + 1], m.end()),
                None => (rest, rest.len()),
            };
            self.pos += advance;
            let unit = raw.trim();
            if !unit.is_empty() {
                return Some(unit);
            }
        }
        None
    }
}
