//! Error types for the metric engines

use thiserror::Error;

/// Errors that can occur inside the computational core
#[derive(Debug, Error)]
pub enum ExposureError {
    #[error(
        "Dimension mismatch: {row_labels} row labels and {col_labels} column labels \
         for a {nrows}x{ncols} matrix"
    )]
    DimensionMismatch {
        row_labels: usize,
        col_labels: usize,
        nrows: usize,
        ncols: usize,
    },

    #[error("Duplicate row label: {0}")]
    DuplicateLabel(String),

    #[error("Cannot align in union mode: label '{0}' is missing from one side")]
    UnalignedLabels(String),

    #[error("Degenerate {axis}: '{label}' has zero L2 norm")]
    DegenerateVector { axis: &'static str, label: String },
}

/// Result type for core operations
pub type ExposureResult<T> = Result<T, ExposureError>;
