//! Format detection and raw table reading
//!
//! Both loaders consume the same intermediate form: a header row plus string
//! records. The format is detected from the file extension, matching the
//! upstream data drops (CSV exports and O*NET Excel workbooks).

use crate::error::{IoError, IoResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A raw tabular file: normalized headers plus string records
///
/// Headers are lower-cased and trimmed on read so loaders can match column
/// names without caring how the source file capitalizes them.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a column by (normalized) name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at (record, column), empty-trimmed to `None`
    pub fn cell<'a>(&'a self, record: &'a [String], column: usize) -> Option<&'a str> {
        let value = record.get(column)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Read a tabular file, dispatching on the extension
///
/// `.csv` is always supported; `.xlsx` requires the `xlsx` cargo feature.
/// Any other extension is an [`IoError::UnsupportedFormat`].
pub fn read_table(path: &Path) -> IoResult<RawTable> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),

        #[cfg(feature = "xlsx")]
        "xlsx" => read_xlsx(path),

        #[cfg(not(feature = "xlsx"))]
        "xlsx" => Err(IoError::UnsupportedFormat(
            "xlsx (rebuild with the `xlsx` feature)".to_string(),
        )),

        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

fn read_csv(path: &Path) -> IoResult<RawTable> {
    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(RawTable { headers, records })
}

#[cfg(feature = "xlsx")]
fn read_xlsx(path: &Path) -> IoResult<RawTable> {
    use calamine::{open_workbook, Data, Reader, Xlsx};

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IoError::InvalidFormat("workbook has no sheets".to_string()))?
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| IoError::EmptyTable(path.display().to_string()))?
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect::<Vec<_>>();

    let records = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawTable { headers, records })
}

#[cfg(feature = "xlsx")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a cell as f64, reporting the column name on failure
pub(crate) fn parse_f64(column: &str, value: &str) -> IoResult<f64> {
    value.trim().parse().map_err(|_| IoError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    })
}
