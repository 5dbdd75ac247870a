//! Document pairing by filename convention.
//!
//! A project's summary and full document share a name prefix and differ only
//! in suffix, e.g. `Castle Mine_Initial Project Description Summary.txt` and
//! `Castle Mine_Initial Project Description.txt`. Documents without a
//! counterpart are silently excluded — a pairing gap is an expected
//! condition, not an error.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Filename suffixes identifying the two document roles.
///
/// Suffixes are matched against the file stem (extension stripped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Suffix marking a Plain Language Summary.
    pub summary_suffix: String,
    /// Suffix marking an Initial Project Description.
    pub full_suffix: String,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            summary_suffix: "_Initial Project Description Summary".to_string(),
            full_suffix: "_Initial Project Description".to_string(),
        }
    }
}

/// A matched summary/full pair of document paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedPaths {
    pub project: String,
    pub summary: PathBuf,
    pub full: PathBuf,
}

/// Pair document paths by the suffix convention in `config`.
///
/// Returns one entry per project where both documents are present, sorted
/// by project name for deterministic output. Unmatched documents are
/// dropped without diagnostics (upstream collaborators may log).
pub fn pair_documents(paths: &[PathBuf], config: &PairingConfig) -> Vec<PairedPaths> {
    let by_stem: FxHashMap<String, &PathBuf> = paths
        .iter()
        .filter_map(|p| stem_of(p).map(|s| (s, p)))
        .collect();

    let mut pairs: Vec<PairedPaths> = by_stem
        .iter()
        .filter_map(|(stem, summary_path)| {
            let project = stem.strip_suffix(config.summary_suffix.as_str())?;
            let full_stem = format!("{project}{}", config.full_suffix);
            let full_path = by_stem.get(&full_stem)?;
            Some(PairedPaths {
                project: project.to_string(),
                summary: (*summary_path).clone(),
                full: (*full_path).clone(),
            })
        })
        .collect();

    pairs.sort_unstable_by(|a, b| a.project.cmp(&b.project));
    pairs
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
