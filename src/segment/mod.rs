//! Sentence segmentation
//!
//! Turns raw extracted document text into cleaned sentence sequences.

mod splitter;

pub use splitter::SentenceSegmenter;
