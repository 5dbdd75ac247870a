//! Sentence-level copy classification and per-project aggregation.

use serde::{Deserialize, Serialize};

use super::blocks::{matching_blocks, MatchBlock};
use crate::types::MatchResult;

/// Configuration for the copy detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum contiguous word-run length for a sentence to count as copied.
    pub min_run_words: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { min_run_words: 6 }
    }
}

/// Classifies summary sentences as copied or original against a pool of
/// full-document sentences.
///
/// Stateless across projects: every call operates only on its explicit
/// inputs, so projects can be processed in parallel without shared state.
#[derive(Debug, Clone, Default)]
pub struct CopyDetector {
    config: DetectorConfig,
}

impl CopyDetector {
    /// Create a detector with the default 6-word threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom config.
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Set the minimum run length.
    pub fn with_min_run_words(mut self, min_run_words: usize) -> Self {
        self.config.min_run_words = min_run_words;
        self
    }

    /// Longest common contiguous word run between `a` and `b`, as a
    /// space-joined string taken from `a`.
    ///
    /// Only runs of at least the configured minimum length qualify; among
    /// those the longest wins, ties breaking toward the first occurrence in
    /// `a`. Returns an empty string when no run qualifies. Comparison is
    /// exact — callers lowercase beforehand for case-insensitive matching.
    pub fn longest_common_run(&self, a: &str, b: &str) -> String {
        let words_a: Vec<&str> = a.split_whitespace().collect();
        let words_b: Vec<&str> = b.split_whitespace().collect();

        let mut best: Option<MatchBlock> = None;
        for block in matching_blocks(&words_a, &words_b) {
            if block.len < self.config.min_run_words {
                continue;
            }
            // Strictly greater keeps the first occurrence on ties.
            if best.is_none_or(|b| block.len > b.len) {
                best = Some(block);
            }
        }

        match best {
            Some(block) => words_a[block.a_start..block.a_start + block.len].join(" "),
            None => String::new(),
        }
    }

    /// Whether `summary_sentence` contains a qualifying verbatim run from
    /// any sentence in `full_sentences`.
    ///
    /// Case-insensitive; short-circuits on the first qualifying match.
    pub fn is_copied(&self, summary_sentence: &str, full_sentences: &[String]) -> bool {
        let summary_lower = summary_sentence.to_lowercase();
        full_sentences.iter().any(|full| {
            let run = self.longest_common_run(&summary_lower, &full.to_lowercase());
            run.split_whitespace().count() >= self.config.min_run_words
        })
    }

    /// Classify every summary sentence against the full-document pool and
    /// aggregate counts into a [`MatchResult`] for `project`.
    ///
    /// Empty inputs degrade to zero counts; this never fails.
    pub fn detect(
        &self,
        project: &str,
        summary_sentences: &[String],
        full_sentences: &[String],
    ) -> MatchResult {
        let copied = summary_sentences
            .iter()
            .filter(|sentence| self.is_copied(sentence, full_sentences))
            .count();
        MatchResult::from_counts(project, summary_sentences.len(), copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    const FULL: &str = "the quick brown fox jumps over the lazy dog today";

    #[test]
    fn test_six_word_run_is_copied() {
        let detector = CopyDetector::new();
        let full = owned(&[FULL]);
        let summary = "yesterday the quick brown fox jumps over something else";
        assert!(detector.is_copied(summary, &full));
    }

    #[test]
    fn test_five_word_run_is_not_copied() {
        let detector = CopyDetector::new();
        let full = owned(&[FULL]);
        let summary = "yesterday the quick brown fox jumps toward something else";
        assert!(!detector.is_copied(summary, &full));
    }

    #[test]
    fn test_case_insensitive() {
        let detector = CopyDetector::new();
        let full = owned(&["the quick brown fox jumps over the fence"]);
        assert!(detector.is_copied("THE QUICK BROWN FOX JUMPS OVER", &full));
    }

    #[test]
    fn test_run_content() {
        let detector = CopyDetector::new();
        let run = detector.longest_common_run(
            "yesterday the quick brown fox jumps over something else",
            FULL,
        );
        assert_eq!(run, "the quick brown fox jumps over");
    }

    #[test]
    fn test_run_below_threshold_is_empty() {
        let detector = CopyDetector::new();
        let run = detector.longest_common_run("the quick brown fox jumps", FULL);
        assert_eq!(run, "");
    }

    #[test]
    fn test_tie_breaks_to_first_occurrence() {
        let detector = CopyDetector::new().with_min_run_words(3);
        let run = detector.longest_common_run(
            "one two three x four five six",
            "one two three y four five six",
        );
        assert_eq!(run, "one two three");
    }

    #[test]
    fn test_detect_aggregation() {
        let detector = CopyDetector::new();
        let full = owned(&[
            FULL,
            "the project will require an access road through the valley",
        ]);
        let summary = owned(&[
            // Copied: 6-word run from the first full sentence.
            "note that the quick brown fox jumps over everything",
            // Copied: 7-word run from the second full sentence.
            "they said it will require an access road through town",
            // Original.
            "entirely new wording with no overlap at all",
        ]);
        let result = detector.detect("Valley Road", &summary, &full);
        assert_eq!(result.project, "Valley Road");
        assert_eq!(result.total_summary_sentences, 3);
        assert_eq!(result.copied_sentences, 2);
        assert_eq!(result.copied_percentage, 66.67);
    }

    #[test]
    fn test_detect_empty_summary() {
        let detector = CopyDetector::new();
        let result = detector.detect("Empty", &[], &owned(&[FULL]));
        assert_eq!(result.total_summary_sentences, 0);
        assert_eq!(result.copied_sentences, 0);
        assert_eq!(result.copied_percentage, 0.0);
    }

    #[test]
    fn test_detect_empty_full_pool() {
        let detector = CopyDetector::new();
        let summary = owned(&["any sentence at all here now then"]);
        let result = detector.detect("NoFull", &summary, &[]);
        assert_eq!(result.copied_sentences, 0);
        assert_eq!(result.copied_percentage, 0.0);
    }

    #[test]
    fn test_run_must_be_contiguous() {
        let detector = CopyDetector::new();
        // Shares six words but with a gap in the middle: two 3-word runs.
        let full = owned(&["the quick brown fox jumps over the lazy dog"]);
        let summary = "the quick brown cat fox jumps over";
        assert!(!detector.is_copied(summary, &full));
    }
}
