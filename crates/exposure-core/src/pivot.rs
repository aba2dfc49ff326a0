//! Long-to-wide pivot of firm composition data
//!
//! Turns the long-format firm-occupation table into a firm-by-occupation
//! matrix of posting counts, summing duplicates and zero-filling pairs that
//! never occur. The wide form feeds `align::normalize` when a unit-norm
//! occupation mix per firm is wanted.

use crate::error::ExposureResult;
use crate::table::{FirmOccupationTable, LabeledMatrix};
use ndarray::Array2;
use std::collections::HashMap;

/// Pivot a firm-occupation table into a Firm×Occupation posting-count matrix
///
/// Rows are firms, columns are occupations, both sorted lexicographically.
/// Duplicate (firm, occupation) rows are summed; absent pairs are zero.
pub fn pivot(firms: &FirmOccupationTable) -> ExposureResult<LabeledMatrix> {
    let mut firm_labels: Vec<String> = firms.rows().iter().map(|r| r.firm_id.clone()).collect();
    firm_labels.sort();
    firm_labels.dedup();

    let mut occupation_labels: Vec<String> = firms
        .rows()
        .iter()
        .map(|r| r.occupation_code.clone())
        .collect();
    occupation_labels.sort();
    occupation_labels.dedup();

    let firm_pos: HashMap<&str, usize> = firm_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();
    let occupation_pos: HashMap<&str, usize> = occupation_labels
        .iter()
        .enumerate()
        .map(|(j, l)| (l.as_str(), j))
        .collect();

    let mut values = Array2::zeros((firm_labels.len(), occupation_labels.len()));
    for row in firms.rows() {
        let i = firm_pos[row.firm_id.as_str()];
        let j = occupation_pos[row.occupation_code.as_str()];
        values[[i, j]] += row.num_postings;
    }

    LabeledMatrix::new(firm_labels, occupation_labels, values)
}
