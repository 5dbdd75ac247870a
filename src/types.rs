//! Core data model
//!
//! Types shared across the segmenter, detector, and pipeline layers.
//! Documents are immutable once segmented; results are immutable once
//! aggregated.

use serde::{Deserialize, Serialize};

/// The role a document plays within a project pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocRole {
    /// The full source document (Initial Project Description).
    Full,
    /// The condensed document checked for copying (Plain Language Summary).
    Summary,
}

impl DocRole {
    /// Returns the user-facing name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Summary => "summary",
        }
    }
}

/// A segmented document: project identifier, role, and sentences in
/// original reading order.
///
/// Sentence order is meaningful for readers but the detector treats the
/// full-document pool as an unordered collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Project identifier shared by both members of a pair.
    pub project: String,
    /// Whether this is the full document or the summary.
    pub role: DocRole,
    /// Cleaned sentences — whitespace-normalized, no embedded line breaks.
    pub sentences: Vec<String>,
}

impl Document {
    /// Create a document from already-segmented sentences.
    pub fn new(project: impl Into<String>, role: DocRole, sentences: Vec<String>) -> Self {
        Self {
            project: project.into(),
            role,
            sentences,
        }
    }

    /// Number of sentences in the document.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if segmentation produced no sentences
    /// (empty or unextractable source text).
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A summary document and its full counterpart for the same project.
///
/// Both members must exist for the pair to be analyzed; pairing happens
/// upstream in [`crate::pipeline::pairing`] and unmatched documents never
/// reach this type.
#[derive(Debug, Clone)]
pub struct ProjectPair {
    pub project: String,
    pub summary: Document,
    pub full: Document,
}

impl ProjectPair {
    /// Pair two documents that share a project identifier.
    pub fn new(summary: Document, full: Document) -> Self {
        debug_assert_eq!(summary.project, full.project);
        debug_assert_eq!(summary.role, DocRole::Summary);
        debug_assert_eq!(full.role, DocRole::Full);
        Self {
            project: summary.project.clone(),
            summary,
            full,
        }
    }
}

/// Per-project aggregate produced by the copy detector.
///
/// Terminal: written to output and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Project identifier.
    pub project: String,
    /// Number of sentences in the summary document.
    pub total_summary_sentences: usize,
    /// Number of summary sentences containing a qualifying verbatim run.
    pub copied_sentences: usize,
    /// `copied / total * 100`, rounded to two decimals; `0.0` when the
    /// summary has no sentences.
    pub copied_percentage: f64,
}

impl MatchResult {
    /// Build a result, deriving the percentage from the counts.
    ///
    /// Never divides by zero: an empty summary yields `0.0`.
    pub fn from_counts(project: impl Into<String>, total: usize, copied: usize) -> Self {
        let copied_percentage = if total > 0 {
            round2(copied as f64 / total as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            project: project.into(),
            total_summary_sentences: total,
            copied_sentences: copied,
            copied_percentage,
        }
    }
}

/// Round to two decimal places, half away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
