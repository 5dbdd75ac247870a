//! Verbatim overlap detection
//!
//! [`blocks`] provides the matching-block primitive over token sequences;
//! [`detector`] classifies summary sentences against a full-document pool
//! and aggregates per-project counts.

mod blocks;
mod detector;

pub use blocks::{matching_blocks, MatchBlock};
pub use detector::{CopyDetector, DetectorConfig};
