//! Heuristic sentence boundary splitter.
//!
//! Splits on `.` or `?` followed by whitespace, with two suppression guards
//! for abbreviations:
//!
//! - title-style: `[A-Z][a-z].` immediately before the whitespace
//!   (e.g. "Dr.", "Mr.") is not a boundary;
//! - dotted-style: a word char, `.`, word char, then the terminator
//!   (e.g. "U.S.", "e.g.") is not a boundary.
//!
//! This is intentionally not a grammar-aware boundary detector; abbreviation
//! leakage outside these two patterns is a known limitation. Fragments are
//! cleaned of embedded line breaks left over from page-wrapped extraction.

use regex::Regex;

/// Stateless sentence segmenter.
///
/// The boundary regex is compiled once at construction; `segment` borrows
/// the input and allocates only the output sentences.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    boundary: Regex,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the standard boundary rules.
    pub fn new() -> Self {
        // Terminator followed by a single whitespace char. The abbreviation
        // guards are applied separately over the preceding chars since the
        // regex engine has no lookbehind.
        let boundary = Regex::new(r"[.?]\s").expect("boundary pattern is valid");
        Self { boundary }
    }

    /// Segment a raw text blob into cleaned, non-empty sentences.
    ///
    /// Empty or whitespace-only input yields an empty sequence — callers
    /// treat that as "no data available", not a failure.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(text) {
            // The whitespace char starts one byte after the terminator
            // (`.` and `?` are both single-byte).
            let ws_pos = m.start() + 1;
            if is_abbreviation_boundary(&text[..ws_pos]) {
                continue;
            }
            push_clean(&mut sentences, &text[start..ws_pos]);
            start = m.end();
        }
        push_clean(&mut sentences, &text[start..]);

        sentences
    }
}

/// Check the chars immediately before a candidate boundary for the two
/// abbreviation patterns. `prefix` ends right after the terminator.
fn is_abbreviation_boundary(prefix: &str) -> bool {
    let mut rev = prefix.chars().rev();
    let last = rev.next();
    let prev1 = rev.next();
    let prev2 = rev.next();
    let prev3 = rev.next();

    // Title abbreviation: "Dr." / "Mr." — uppercase, lowercase, period.
    if last == Some('.')
        && prev1.is_some_and(|c| c.is_ascii_lowercase())
        && prev2.is_some_and(|c| c.is_ascii_uppercase())
    {
        return true;
    }

    // Dotted abbreviation: word char, period, word char, terminator —
    // covers "U.S.", "e.g.", "i.e." mid-token.
    if prev1.is_some_and(is_word_char)
        && prev2 == Some('.')
        && prev3.is_some_and(is_word_char)
    {
        return true;
    }

    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Clean a fragment (line breaks to spaces, trim) and keep it if non-empty.
fn push_clean(sentences: &mut Vec<String>, fragment: &str) {
    let cleaned: String = fragment
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if !cleaned.is_empty() {
        sentences.push(cleaned.to_string());
    }
}
