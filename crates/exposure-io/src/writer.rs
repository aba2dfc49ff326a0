//! Score table writer
//!
//! Serializes a `ScoreTable` to CSV in its iteration order, which for the
//! engines means first-encounter order of the label in the input data.

use crate::error::{IoError, IoResult};
use exposure_core::ScoreTable;
use std::path::Path;
use tracing::info;

/// Write a score table as a two-column CSV file
pub fn write_scores(
    path: &Path,
    scores: &ScoreTable,
    label_header: &str,
    value_header: &str,
) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::WriteFailed(e.to_string()))?;

    writer
        .write_record([label_header, value_header])
        .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    for (label, score) in scores.iter() {
        let value = score.to_string();
        writer
            .write_record([label, value.as_str()])
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| IoError::WriteFailed(e.to_string()))?;

    info!(rows = scores.len(), "wrote scores to {}", path.display());
    Ok(())
}
