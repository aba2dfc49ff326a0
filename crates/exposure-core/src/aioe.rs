//! AIOE - AI Occupational Exposure
//!
//! AIOE_k = Σ_j (I_jk × A_j), where I_jk is the importance of ability j for
//! occupation k and A_j is the ability's aggregate relevance to existing AI
//! applications (the row sum of the relevance matrix).
//!
//! The join on ability id uses inner semantics: ratings for abilities absent
//! from the relevance matrix are dropped from the sum, and an occupation
//! whose abilities all miss the matrix is absent from the output entirely
//! rather than present with a zero score. Sparse overlap is expected input,
//! not an error.

use crate::table::{LabeledMatrix, OccupationAbilityTable, ScoreTable};

/// Compute the ability exposure vector A_j
///
/// One entry per ability (row) of the relevance matrix, equal to the sum of
/// that ability's relevance scores across all AI-application columns. Entry
/// order follows matrix row order.
pub fn ability_exposure(relevance: &LabeledMatrix) -> ScoreTable {
    let mut exposure = ScoreTable::new();
    for (label, sum) in relevance.row_labels().iter().zip(relevance.row_sums()) {
        exposure.insert(label, sum);
    }
    exposure
}

/// Compute one AIOE score per occupation
///
/// Scores accumulate additively per occupation code; an occupation appearing
/// in many rating rows contributes each overlapping ability exactly once.
/// Note that `level` (L_jk) is deliberately not part of the formula.
pub fn compute_aioe(table: &OccupationAbilityTable, relevance: &LabeledMatrix) -> ScoreTable {
    let exposure = ability_exposure(relevance);

    let mut scores = ScoreTable::new();
    for row in table.rows() {
        if let Some(aj) = exposure.get(&row.ability_id) {
            scores.accumulate(&row.occupation_code, row.importance * aj);
        }
    }
    scores
}
