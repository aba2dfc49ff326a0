//! Relevance matrix loader
//!
//! The ability-by-AI-application relevance matrix arrives in wide form: the
//! first column holds ability ids, every remaining column is one AI
//! application, and cells are relevance scores in [0, 1].

use crate::error::{IoError, IoResult};
use crate::format::{parse_f64, read_table};
use exposure_core::LabeledMatrix;
use ndarray::Array2;
use std::path::Path;
use tracing::info;

/// Load a labeled relevance matrix from a CSV or XLSX file
///
/// Row labels come from the first column, column labels from the remaining
/// headers. Empty cells parse as 0.
pub fn load_relevance_matrix(path: &Path) -> IoResult<LabeledMatrix> {
    let raw = read_table(path)?;

    if raw.headers.len() < 2 {
        return Err(IoError::InvalidFormat(format!(
            "a matrix file needs a label column plus at least one value column, got {} columns",
            raw.headers.len()
        )));
    }
    if raw.records.is_empty() {
        return Err(IoError::EmptyTable(path.display().to_string()));
    }

    let col_labels: Vec<String> = raw.headers[1..].to_vec();
    let mut row_labels = Vec::with_capacity(raw.records.len());
    let mut values = Array2::zeros((raw.records.len(), col_labels.len()));

    for (i, record) in raw.records.iter().enumerate() {
        let label = match raw.cell(record, 0) {
            Some(v) => v.to_string(),
            None => {
                return Err(IoError::InvalidValue {
                    column: raw.headers[0].clone(),
                    value: String::new(),
                })
            }
        };
        row_labels.push(label);

        for (j, column) in col_labels.iter().enumerate() {
            values[[i, j]] = match raw.cell(record, j + 1) {
                Some(v) => parse_f64(column, v)?,
                None => 0.0,
            };
        }
    }

    let matrix = LabeledMatrix::new(row_labels, col_labels, values)
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

    info!(
        abilities = matrix.nrows(),
        applications = matrix.ncols(),
        "loaded relevance matrix from {}",
        path.display()
    );

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relevance.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_relevance_matrix_basic() {
        let (_dir, path) = write_csv(
            "ability_id,App1,App2\n\
             A1,0.5,0.5\n\
             A2,1.0,\n",
        );

        let matrix = load_relevance_matrix(&path).unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.row_labels(), &["A1".to_string(), "A2".to_string()]);
        assert_eq!(matrix.col_labels(), &["app1".to_string(), "app2".to_string()]);
        assert_eq!(matrix.get("A1", "app2"), Some(0.5));
        // empty cell parses as zero
        assert_eq!(matrix.get("A2", "app2"), Some(0.0));
    }

    #[test]
    fn test_load_relevance_matrix_duplicate_ability() {
        let (_dir, path) = write_csv(
            "ability_id,App1\n\
             A1,0.5\n\
             A1,0.7\n",
        );

        assert!(matches!(
            load_relevance_matrix(&path),
            Err(IoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_load_relevance_matrix_bad_cell() {
        let (_dir, path) = write_csv("ability_id,App1\nA1,strong\n");

        assert!(matches!(
            load_relevance_matrix(&path),
            Err(IoError::InvalidValue { column, .. }) if column == "app1"
        ));
    }

    #[test]
    fn test_load_relevance_matrix_empty() {
        let (_dir, path) = write_csv("ability_id,App1\n");

        assert!(matches!(
            load_relevance_matrix(&path),
            Err(IoError::EmptyTable(_))
        ));
    }
}
