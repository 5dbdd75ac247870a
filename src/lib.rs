//! plaincheck — sentence-level verbatim copy analysis for plain-language
//! summaries of regulatory documents.
//!
//! Projects under impact-assessment processes publish a full Initial
//! Project Description (IPD) and a condensed Plain Language Summary (PLS).
//! This crate measures how much of each summary is copied verbatim from its
//! full document: raw text is segmented into sentences, and a summary
//! sentence counts as copied when it shares a contiguous, case-insensitive
//! run of at least six words with any sentence in the full document.
//!
//! # Quick start
//!
//! ```
//! use plaincheck::pipeline::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new();
//! let result = pipeline.analyze_pair(
//!     "Harbour Expansion",
//!     "The terminal will handle four million tonnes per year. It opens in 2030.",
//!     "Once complete, the terminal will handle four million tonnes per year of bulk cargo.",
//! );
//! assert_eq!(result.total_summary_sentences, 2);
//! assert_eq!(result.copied_sentences, 1);
//! assert_eq!(result.copied_percentage, 50.0);
//! ```
//!
//! # Modules
//!
//! - [`segment`] — heuristic sentence boundary splitting with abbreviation
//!   guards, tolerant of page-wrapped extraction noise
//! - [`matching`] — matching-block search over word sequences and the copy
//!   detector built on it
//! - [`pipeline`] — document pairing by filename convention, text sources,
//!   the parallel per-project runner, and CSV reporting
//! - [`types`] — documents, project pairs, and per-project results
//!
//! Data-quality problems never fail a run: empty or unreadable documents
//! degrade to empty sentence sequences, and unpaired documents are excluded
//! upstream of analysis.

pub mod error;
pub mod matching;
pub mod pipeline;
pub mod segment;
pub mod types;

pub use error::AnalysisError;
pub use matching::{CopyDetector, DetectorConfig};
pub use pipeline::AnalysisPipeline;
pub use segment::SentenceSegmenter;
pub use types::{DocRole, Document, MatchResult, ProjectPair};
