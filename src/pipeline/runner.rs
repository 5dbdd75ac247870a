//! Analysis runner — segments document pairs and aggregates copy results.
//!
//! Each project pair is processed in isolation with no shared mutable
//! state, so pairs run in parallel across a rayon pool. Data-quality
//! problems (empty extraction, unreadable documents) degrade to empty
//! sentence sequences and zero counts; only the caller's own I/O can fail.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::pairing::PairedPaths;
use super::source::TextSource;
use crate::matching::{CopyDetector, DetectorConfig};
use crate::segment::SentenceSegmenter;
use crate::types::{DocRole, Document, MatchResult, ProjectPair};

/// Raw text for one project pair, ready for segmentation.
#[derive(Debug, Clone)]
pub struct PairInput {
    pub project: String,
    pub summary_text: String,
    pub full_text: String,
}

/// Segmenter + detector over explicit inputs; holds no per-project state.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPipeline {
    segmenter: SentenceSegmenter,
    detector: CopyDetector,
}

impl AnalysisPipeline {
    /// Pipeline with default segmentation rules and the 6-word threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with a custom detector configuration.
    pub fn with_detector_config(config: DetectorConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            detector: CopyDetector::with_config(config),
        }
    }

    /// Segment one raw text blob into a [`Document`].
    pub fn segment_document(&self, project: &str, role: DocRole, text: &str) -> Document {
        let sentences = self.segmenter.segment(text);
        debug!(
            project,
            role = role.as_str(),
            sentences = sentences.len(),
            "segmented document"
        );
        Document::new(project, role, sentences)
    }

    /// Segment both texts of a pair and classify the summary sentences.
    pub fn analyze_pair(&self, project: &str, summary_text: &str, full_text: &str) -> MatchResult {
        let summary = self.segment_document(project, DocRole::Summary, summary_text);
        let full = self.segment_document(project, DocRole::Full, full_text);
        self.analyze_documents(&ProjectPair::new(summary, full))
    }

    /// Classify an already-segmented pair.
    pub fn analyze_documents(&self, pair: &ProjectPair) -> MatchResult {
        let result = self.detector.detect(
            &pair.project,
            &pair.summary.sentences,
            &pair.full.sentences,
        );
        debug!(
            project = %result.project,
            total = result.total_summary_sentences,
            copied = result.copied_sentences,
            percentage = result.copied_percentage,
            "analyzed project pair"
        );
        result
    }

    /// Analyze a batch of pairs in parallel, one result per input, in
    /// input order.
    pub fn run(&self, inputs: &[PairInput]) -> Vec<MatchResult> {
        inputs
            .par_iter()
            .map(|input| self.analyze_pair(&input.project, &input.summary_text, &input.full_text))
            .collect()
    }

    /// Pull raw text for each paired path through `source`, then analyze.
    ///
    /// A document that fails to read contributes an empty sentence
    /// sequence (logged at warn level) rather than aborting the batch —
    /// the same degradation as failed upstream extraction.
    pub fn run_paths<S>(&self, source: &S, pairs: &[PairedPaths]) -> Vec<MatchResult>
    where
        S: TextSource + Sync,
    {
        let read = |project: &str, path: &std::path::Path| match source.extract(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    project,
                    path = %path.display(),
                    %err,
                    "extraction failed, treating document as empty"
                );
                String::new()
            }
        };

        pairs
            .par_iter()
            .map(|pair| {
                let summary_text = read(&pair.project, &pair.summary);
                let full_text = read(&pair.project, &pair.full);
                self.analyze_pair(&pair.project, &summary_text, &full_text)
            })
            .collect()
    }
}
