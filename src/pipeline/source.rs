//! Raw text acquisition.
//!
//! Text extraction is an external collaborator: whatever produced the text
//! (PDF extractor, OCR, plain files), the pipeline only needs one
//! concatenated string per document, page order preserved. The [`TextSource`]
//! trait is that seam; [`PlainTextSource`] covers pre-extracted text files.

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

/// Supplies the raw extracted text for a document path.
pub trait TextSource {
    /// Read the full text of one document.
    ///
    /// An empty string is a valid result (unextractable document) and
    /// degrades to an empty sentence sequence downstream; errors are
    /// reserved for real I/O failures.
    fn extract(&self, path: &Path) -> Result<String, AnalysisError>;
}

/// Reads documents that are already plain text on disk.
///
/// Invalid UTF-8 is replaced rather than rejected — extractor output is
/// noisy and a few mangled chars must not sink a whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract(&self, path: &Path) -> Result<String, AnalysisError> {
        let bytes = fs::read(path).map_err(|e| AnalysisError::io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
