//! Alignment and validation helpers for labeled matrices
//!
//! Two tables keyed by the same label set (e.g. ability ids) must agree on
//! row order before any elementwise or matrix operation is meaningful. The
//! helpers here restrict two matrices to a shared, lexicographically sorted
//! label set, pre-check shapes for multiplication, and L2-normalize along
//! either axis.

use crate::error::{ExposureError, ExposureResult};
use crate::table::LabeledMatrix;
use ndarray::Array2;
use std::collections::HashSet;

/// How to combine the row-label sets of two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Keep only labels present in both matrices
    Intersection,
    /// Keep labels present in either matrix. There is no defined value for a
    /// row missing from one side, so union alignment fails with
    /// [`ExposureError::UnalignedLabels`] unless the label sets are equal.
    Union,
}

/// Axis selector for [`normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixAxis {
    /// Operate on each row (e.g. one firm's occupation vector)
    Rows,
    /// Operate on each column
    Columns,
}

/// Align two matrices on their row labels
///
/// Returns both matrices restricted to the shared label set, rows sorted
/// lexicographically so downstream operations see identical orderings.
pub fn align(
    a: &LabeledMatrix,
    b: &LabeledMatrix,
    mode: AlignMode,
) -> ExposureResult<(LabeledMatrix, LabeledMatrix)> {
    let labels_a: HashSet<&str> = a.row_labels().iter().map(|l| l.as_str()).collect();
    let labels_b: HashSet<&str> = b.row_labels().iter().map(|l| l.as_str()).collect();

    let mut common: Vec<String> = match mode {
        AlignMode::Intersection => labels_a
            .intersection(&labels_b)
            .map(|l| l.to_string())
            .collect(),
        AlignMode::Union => {
            // Union is only well-defined when nothing is actually missing.
            if let Some(label) = labels_a.symmetric_difference(&labels_b).min() {
                return Err(ExposureError::UnalignedLabels(label.to_string()));
            }
            labels_a.iter().map(|l| l.to_string()).collect()
        }
    };
    common.sort();

    Ok((restrict_rows(a, &common)?, restrict_rows(b, &common)?))
}

/// Check that `a` and `b` have multiplication-compatible shapes
///
/// True iff the column count of `a` equals the row count of `b`. This is a
/// pre-check only; it never fails.
pub fn validate_shape(a: &LabeledMatrix, b: &LabeledMatrix) -> bool {
    a.ncols() == b.nrows()
}

/// L2-normalize a matrix along the chosen axis
///
/// Every entry is divided by the Euclidean norm of its row (`Rows`) or column
/// (`Columns`). A zero-norm row/column has no unit-vector image, so it fails
/// with [`ExposureError::DegenerateVector`] rather than producing NaNs.
pub fn normalize(m: &LabeledMatrix, axis: MatrixAxis) -> ExposureResult<LabeledMatrix> {
    let mut values = m.values().clone();

    match axis {
        MatrixAxis::Rows => {
            for (i, mut row) in values.rows_mut().into_iter().enumerate() {
                let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
                if norm == 0.0 {
                    return Err(ExposureError::DegenerateVector {
                        axis: "row",
                        label: m.row_labels()[i].clone(),
                    });
                }
                row.mapv_inplace(|v| v / norm);
            }
        }
        MatrixAxis::Columns => {
            for (j, mut col) in values.columns_mut().into_iter().enumerate() {
                let norm = col.iter().map(|v| v * v).sum::<f64>().sqrt();
                if norm == 0.0 {
                    return Err(ExposureError::DegenerateVector {
                        axis: "column",
                        label: m.col_labels()[j].clone(),
                    });
                }
                col.mapv_inplace(|v| v / norm);
            }
        }
    }

    LabeledMatrix::new(m.row_labels().to_vec(), m.col_labels().to_vec(), values)
}

/// Restrict a matrix to the given row labels, in the given order
fn restrict_rows(m: &LabeledMatrix, labels: &[String]) -> ExposureResult<LabeledMatrix> {
    let mut values = Array2::zeros((labels.len(), m.ncols()));
    for (i, label) in labels.iter().enumerate() {
        if let Some(source) = m.row(label) {
            values.row_mut(i).assign(&source);
        }
    }
    LabeledMatrix::new(labels.to_vec(), m.col_labels().to_vec(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn matrix(rows: &[&str], cols: &[&str], values: Array2<f64>) -> LabeledMatrix {
        LabeledMatrix::new(
            rows.iter().map(|s| s.to_string()).collect(),
            cols.iter().map(|s| s.to_string()).collect(),
            values,
        )
        .unwrap()
    }

    #[test]
    fn test_align_intersection_sorts_and_restricts() {
        let a = matrix(
            &["A3", "A1", "A2"],
            &["x"],
            array![[3.0], [1.0], [2.0]],
        );
        let b = matrix(&["A2", "A1"], &["y", "z"], array![[2.0, 2.5], [1.0, 1.5]]);

        let (a2, b2) = align(&a, &b, AlignMode::Intersection).unwrap();
        assert_eq!(a2.row_labels(), &["A1".to_string(), "A2".to_string()]);
        assert_eq!(b2.row_labels(), a2.row_labels());
        assert_eq!(a2.values()[[0, 0]], 1.0);
        assert_eq!(a2.values()[[1, 0]], 2.0);
        assert_eq!(b2.values()[[0, 1]], 1.5);
    }

    #[test]
    fn test_align_intersection_empty_overlap() {
        let a = matrix(&["A1"], &["x"], array![[1.0]]);
        let b = matrix(&["B1"], &["y"], array![[2.0]]);

        let (a2, b2) = align(&a, &b, AlignMode::Intersection).unwrap();
        assert_eq!(a2.nrows(), 0);
        assert_eq!(b2.nrows(), 0);
    }

    #[test]
    fn test_align_union_requires_equal_label_sets() {
        let a = matrix(&["A1", "A2"], &["x"], array![[1.0], [2.0]]);
        let b = matrix(&["A1"], &["y"], array![[1.0]]);

        assert!(matches!(
            align(&a, &b, AlignMode::Union),
            Err(ExposureError::UnalignedLabels(l)) if l == "A2"
        ));

        let c = matrix(&["A2", "A1"], &["y"], array![[2.0], [1.0]]);
        let (a2, c2) = align(&a, &c, AlignMode::Union).unwrap();
        assert_eq!(a2.row_labels(), &["A1".to_string(), "A2".to_string()]);
        assert_eq!(c2.row_labels(), a2.row_labels());
    }

    #[test]
    fn test_validate_shape() {
        let a = matrix(&["r1"], &["c1", "c2"], array![[1.0, 2.0]]);
        let b = matrix(&["r1", "r2"], &["c1"], array![[1.0], [2.0]]);
        let c = matrix(&["r1"], &["c1"], array![[1.0]]);

        assert!(validate_shape(&a, &b));
        assert!(!validate_shape(&a, &c));
        assert!(!validate_shape(&b, &a));
    }

    #[test]
    fn test_normalize_rows() {
        let m = matrix(&["r1", "r2"], &["c1", "c2"], array![[3.0, 4.0], [0.0, 2.0]]);
        let n = normalize(&m, MatrixAxis::Rows).unwrap();

        assert!((n.values()[[0, 0]] - 0.6).abs() < 1e-12);
        assert!((n.values()[[0, 1]] - 0.8).abs() < 1e-12);
        assert!((n.values()[[1, 1]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_columns() {
        let m = matrix(&["r1", "r2"], &["c1"], array![[3.0], [4.0]]);
        let n = normalize(&m, MatrixAxis::Columns).unwrap();

        assert!((n.values()[[0, 0]] - 0.6).abs() < 1e-12);
        assert!((n.values()[[1, 0]] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_row_fails() {
        let m = matrix(&["r1", "r2"], &["c1"], array![[0.0], [4.0]]);
        assert!(matches!(
            normalize(&m, MatrixAxis::Rows),
            Err(ExposureError::DegenerateVector { axis: "row", label }) if label == "r1"
        ));
    }

    #[test]
    fn test_normalize_zero_column_fails() {
        let m = matrix(&["r1"], &["c1", "c2"], array![[1.0, 0.0]]);
        assert!(matches!(
            normalize(&m, MatrixAxis::Columns),
            Err(ExposureError::DegenerateVector { axis: "column", label }) if label == "c2"
        ));
    }
}
