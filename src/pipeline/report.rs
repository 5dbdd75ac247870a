//! Tabular result output.
//!
//! Renders [`MatchResult`] records as CSV with the column order consumers
//! expect: Project, Total Summary Sentences, Copied Sentences, Copied
//! Percentage. Storage beyond that is the caller's concern — results also
//! carry serde derives for JSON persistence.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AnalysisError;
use crate::types::MatchResult;

const HEADER: &str = "Project,Total Summary Sentences,Copied Sentences,Copied Percentage";

/// Render results as CSV text, header first, one row per project.
pub fn render_csv(results: &[MatchResult]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for result in results {
        out.push_str(&csv_field(&result.project));
        out.push_str(&format!(
            ",{},{},{}\n",
            result.total_summary_sentences,
            result.copied_sentences,
            format_percentage(result.copied_percentage),
        ));
    }
    out
}

/// Write the CSV rendering of `results` to `path`.
pub fn write_csv(path: &Path, results: &[MatchResult]) -> Result<(), AnalysisError> {
    fs::write(path, render_csv(results)).map_err(|e| AnalysisError::io(path, e))?;
    info!(path = %path.display(), projects = results.len(), "wrote match results");
    Ok(())
}

/// Always keep at least one decimal so whole percentages read as "30.0",
/// not "30"; otherwise print the rounded value as-is ("66.67").
fn format_percentage(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{pct:.1}")
    } else {
        format!("{pct}")
    }
}

/// Quote a field when it contains a comma, quote, or line break.
/// Project names come from filenames and may contain commas.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
