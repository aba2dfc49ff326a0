//! Typed tables for exposure computation
//!
//! Input data arrives as loosely-typed tabular files; the loaders in
//! `exposure-io` bind them to the value objects defined here so the engines
//! never look up columns by name:
//!
//! - `LabeledMatrix`: a dense float matrix with string row/column labels
//!   (the ability-by-application relevance matrix, the pivoted
//!   firm-by-occupation matrix)
//! - `OccupationAbilityTable`: long-format (occupation, ability) ratings
//! - `FirmOccupationTable`: long-format (firm, occupation) composition
//! - `ScoreTable`: insertion-ordered label-to-score output mapping

use crate::error::{ExposureError, ExposureResult};
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A dense f64 matrix with string labels on both axes
///
/// Row labels must be unique so that label-based row lookup is unambiguous.
/// Column labels are not required to be unique (they never drive a join).
#[derive(Debug, Clone)]
pub struct LabeledMatrix {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    values: Array2<f64>,
    row_index: HashMap<String, usize>,
}

impl LabeledMatrix {
    /// Create a labeled matrix, validating label counts against the shape
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        values: Array2<f64>,
    ) -> ExposureResult<Self> {
        let (nrows, ncols) = values.dim();
        if row_labels.len() != nrows || col_labels.len() != ncols {
            return Err(ExposureError::DimensionMismatch {
                row_labels: row_labels.len(),
                col_labels: col_labels.len(),
                nrows,
                ncols,
            });
        }

        let mut row_index = HashMap::with_capacity(row_labels.len());
        for (i, label) in row_labels.iter().enumerate() {
            if row_index.insert(label.clone(), i).is_some() {
                return Err(ExposureError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self {
            row_labels,
            col_labels,
            values,
            row_index,
        })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Row labels in matrix order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels in matrix order
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// The underlying values
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Position of a row label, if present
    pub fn row_position(&self, label: &str) -> Option<usize> {
        self.row_index.get(label).copied()
    }

    /// View of the row with the given label
    pub fn row(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.row_position(label).map(|i| self.values.row(i))
    }

    /// Cell lookup by row and column label
    pub fn get(&self, row_label: &str, col_label: &str) -> Option<f64> {
        let i = self.row_position(row_label)?;
        let j = self.col_labels.iter().position(|c| c == col_label)?;
        Some(self.values[[i, j]])
    }

    /// Sum of each row, in matrix order
    pub fn row_sums(&self) -> Vec<f64> {
        self.values.sum_axis(Axis(1)).to_vec()
    }
}

/// One (occupation, ability) rating
///
/// `level` is carried through from the source data for completeness but is
/// not consumed by the current scoring formula, which weights by importance
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationAbilityRow {
    pub occupation_code: String,
    pub ability_id: String,
    /// Ijk - how central the ability is to the occupation
    pub importance: f64,
    /// Ljk - required proficiency level (unused by scoring)
    pub level: f64,
}

/// Long-format occupation-by-ability ratings table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupationAbilityTable {
    rows: Vec<OccupationAbilityRow>,
}

impl OccupationAbilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<OccupationAbilityRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: OccupationAbilityRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[OccupationAbilityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct occupation codes
    pub fn num_occupations(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.occupation_code.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// One (firm, occupation) composition row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirmOccupationRow {
    pub firm_id: String,
    pub occupation_code: String,
    /// Normalized workforce share, when the source provides one
    pub share: Option<f64>,
    /// Raw posting count; loaders default this to 1 per row
    pub num_postings: f64,
}

impl FirmOccupationRow {
    /// The weight used for scoring: `share` when present, else `num_postings`
    pub fn weight(&self) -> f64 {
        self.share.unwrap_or(self.num_postings)
    }
}

/// Long-format firm-by-occupation composition table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmOccupationTable {
    rows: Vec<FirmOccupationRow>,
}

impl FirmOccupationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<FirmOccupationRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: FirmOccupationRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[FirmOccupationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct firm ids
    pub fn num_firms(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.firm_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of distinct occupation codes
    pub fn num_occupations(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.occupation_code.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// An ordered label-to-score mapping
///
/// Labels keep first-encounter (insertion) order, so an engine that
/// accumulates over an input table emits firms/occupations in the order the
/// input introduced them. Lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    labels: Vec<String>,
    scores: Vec<f64>,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the score for `label`, inserting it at the end on
    /// first encounter
    pub fn accumulate(&mut self, label: &str, amount: f64) {
        match self.index.get(label) {
            Some(&i) => self.scores[i] += amount,
            None => {
                self.index.insert(label.to_string(), self.labels.len());
                self.labels.push(label.to_string());
                self.scores.push(amount);
            }
        }
    }

    /// Set the score for `label`, replacing any existing value
    pub fn insert(&mut self, label: &str, score: f64) {
        match self.index.get(label) {
            Some(&i) => self.scores[i] = score,
            None => {
                self.index.insert(label.to_string(), self.labels.len());
                self.labels.push(label.to_string());
                self.scores.push(score);
            }
        }
    }

    /// Score for a label, if present
    pub fn get(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&i| self.scores[i])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// (label, score) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(|l| l.as_str())
            .zip(self.scores.iter().copied())
    }

    /// Copy with every score rounded to `digits` decimal places
    pub fn rounded(&self, digits: i32) -> ScoreTable {
        let factor = 10f64.powi(digits);
        let mut out = ScoreTable::new();
        for (label, score) in self.iter() {
            out.insert(label, (score * factor).round() / factor);
        }
        out
    }
}
