//! Firm-occupation composition loader
//!
//! Reads long-format job-posting data: one row per (firm, occupation), with
//! an optional normalized `share` column and an optional `num_postings` (or
//! `count`) column. Rows without a posting count default to 1, so a file of
//! bare postings still yields usable frequency weights.

use crate::error::{IoError, IoResult};
use crate::format::{parse_f64, read_table};
use exposure_core::{FirmOccupationRow, FirmOccupationTable};
use std::path::Path;
use tracing::info;

/// Load a firm-occupation table from a CSV or XLSX file
///
/// Fails with [`IoError::MissingColumns`] when `firm_id` or
/// `occupation_code` is absent.
pub fn load_firm_postings(path: &Path) -> IoResult<FirmOccupationTable> {
    let raw = read_table(path)?;

    let (firm_col, occupation_col) = match (
        raw.column_index("firm_id"),
        raw.column_index("occupation_code"),
    ) {
        (Some(f), Some(o)) => (f, o),
        (f, o) => {
            let mut missing = Vec::new();
            if f.is_none() {
                missing.push("firm_id");
            }
            if o.is_none() {
                missing.push("occupation_code");
            }
            return Err(IoError::MissingColumns(missing.join(", ")));
        }
    };
    let share_col = raw.column_index("share");
    let postings_col = raw
        .column_index("num_postings")
        .or_else(|| raw.column_index("count"));

    let mut table = FirmOccupationTable::new();
    for record in &raw.records {
        let firm_id = match raw.cell(record, firm_col) {
            Some(v) => v.to_string(),
            None => continue,
        };
        let occupation_code = match raw.cell(record, occupation_col) {
            Some(v) => v.to_string(),
            None => continue,
        };

        let share = match share_col.and_then(|c| raw.cell(record, c)) {
            Some(v) => Some(parse_f64("share", v)?),
            None => None,
        };
        let num_postings = match postings_col.and_then(|c| raw.cell(record, c)) {
            Some(v) => parse_f64("num_postings", v)?,
            None => 1.0,
        };

        table.push(FirmOccupationRow {
            firm_id,
            occupation_code,
            share,
            num_postings,
        });
    }

    info!(
        rows = table.len(),
        firms = table.num_firms(),
        occupations = table.num_occupations(),
        "loaded firm postings from {}",
        path.display()
    );

    Ok(table)
}
