//! AIFE - AI Firm Exposure
//!
//! AIFE_f = Σ_k (w_fk × AIOE_k) over the firm's occupation rows, where w_fk
//! is the row's `share` when present and its posting count otherwise.
//!
//! Occupations with no AIOE score contribute nothing (skipped, not an
//! error), and a firm whose rows all miss the AIOE mapping is absent from
//! the output rather than present with a zero score.

use crate::table::{FirmOccupationTable, ScoreTable};

/// Number of decimal digits kept in AIFE output scores
const AIFE_SCORE_DIGITS: i32 = 4;

/// Compute one AIFE score per firm
///
/// Output rows follow first-encounter order of `firm_id` in the input, and
/// scores are rounded to four decimal digits.
pub fn compute_aife(firms: &FirmOccupationTable, aioe: &ScoreTable) -> ScoreTable {
    let mut scores = ScoreTable::new();
    for row in firms.rows() {
        if let Some(score) = aioe.get(&row.occupation_code) {
            scores.accumulate(&row.firm_id, row.weight() * score);
        }
    }
    scores.rounded(AIFE_SCORE_DIGITS)
}
