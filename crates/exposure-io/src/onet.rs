//! O*NET ability ratings loader
//!
//! The O*NET distribution ships ability ratings in long scale-coded form:
//! one row per (occupation, ability, scale), where scale `IM` carries the
//! importance rating and `LV` the level rating. This loader filters to those
//! two scales and merges them into one row per (occupation, ability), with a
//! missing counterpart treated as 0.

use crate::error::{IoError, IoResult};
use crate::format::{parse_f64, read_table};
use exposure_core::{OccupationAbilityRow, OccupationAbilityTable};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const SCALE_IMPORTANCE: &str = "im";
const SCALE_LEVEL: &str = "lv";

/// Load an occupation-ability ratings table from a scale-coded file
///
/// Expects columns `O*NET-SOC Code`, `Element ID`, `Scale ID`, `Data Value`
/// (any capitalization). Rows with scales other than `IM`/`LV` are ignored.
pub fn load_ability_ratings(path: &Path) -> IoResult<OccupationAbilityTable> {
    let raw = read_table(path)?;

    let columns = [
        ("o*net-soc code", raw.column_index("o*net-soc code")),
        ("element id", raw.column_index("element id")),
        ("scale id", raw.column_index("scale id")),
        ("data value", raw.column_index("data value")),
    ];
    let missing: Vec<&str> = columns
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(IoError::MissingColumns(missing.join(", ")));
    }
    let [occupation_col, ability_col, scale_col, value_col] =
        columns.map(|(_, idx)| idx.unwrap_or(0));

    // Merge IM and LV rows per (occupation, ability), keeping the order in
    // which pairs first appear in the file.
    let mut order: Vec<(String, String)> = Vec::new();
    let mut merged: HashMap<(String, String), (f64, f64)> = HashMap::new();

    for record in &raw.records {
        let scale = match raw.cell(record, scale_col) {
            Some(v) => v.to_lowercase(),
            None => continue,
        };
        if scale != SCALE_IMPORTANCE && scale != SCALE_LEVEL {
            continue;
        }

        let (occupation, ability) = match (
            raw.cell(record, occupation_col),
            raw.cell(record, ability_col),
        ) {
            (Some(o), Some(a)) => (o.to_string(), a.to_string()),
            _ => continue,
        };
        let value = match raw.cell(record, value_col) {
            Some(v) => parse_f64("data value", v)?,
            None => 0.0,
        };

        let key = (occupation, ability);
        let entry = merged.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (0.0, 0.0)
        });
        if scale == SCALE_IMPORTANCE {
            entry.0 = value;
        } else {
            entry.1 = value;
        }
    }

    let mut table = OccupationAbilityTable::new();
    for key in &order {
        let (importance, level) = merged[key];
        table.push(OccupationAbilityRow {
            occupation_code: key.0.clone(),
            ability_id: key.1.clone(),
            importance,
            level,
        });
    }

    info!(
        rows = table.len(),
        occupations = table.num_occupations(),
        "loaded ability ratings from {}",
        path.display()
    );

    Ok(table)
}
