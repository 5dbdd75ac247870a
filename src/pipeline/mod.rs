//! Per-project orchestration
//!
//! Wires the segmenter and detector together: pairing documents by filename
//! convention, pulling raw text through a [`TextSource`], running each
//! project pair in isolation, and rendering the aggregate results.

mod pairing;
mod report;
mod runner;
mod source;

pub use pairing::{pair_documents, PairedPaths, PairingConfig};
pub use report::{render_csv, write_csv};
pub use runner::{AnalysisPipeline, PairInput};
pub use source::{PlainTextSource, TextSource};
