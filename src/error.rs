//! Crate error type.
//!
//! The segmenter and detector never fail on data-quality issues — they
//! degrade to empty sequences and zero counts. Errors exist only at the
//! I/O seam (reading source text, writing reports).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Reading a source document or writing a report failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
