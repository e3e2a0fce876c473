//! CSV ingestion for EDA traces
//!
//! Uploaded data is messy, so ingestion is heuristic and non-fatal by
//! policy: the column is picked by name (`eda`, `gsr`, `electrodermal`,
//! case-insensitive, trimmed), else the first column whose first non-empty
//! cell parses as a number; unparseable or non-finite cells are dropped;
//! and when nothing usable remains the trivial default series is returned
//! instead of an error.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use stress_core::{EdaSeries, Error, Result};
use tracing::warn;

/// Header names (lowercased, trimmed) recognized as the EDA column
pub const EDA_COLUMN_NAMES: [&str; 3] = ["eda", "gsr", "electrodermal"];

/// Fallback series used when the upload carries no usable numeric column
pub const DEFAULT_SERIES: [f64; 2] = [0.4, 0.42];

/// Parse an uploaded CSV into an EDA series
///
/// Never fails on content: a CSV without a usable column yields the
/// default series. Only transport-level read errors are surfaced.
pub fn read_eda_csv<R: Read>(reader: R) -> Result<EdaSeries> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::MalformedInput(format!("CSV headers: {e}")))?
        .clone();

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in csv_reader.records() {
        // Skip rows the CSV parser rejects rather than failing the upload
        match record {
            Ok(r) => rows.push(r),
            Err(e) => warn!(error = %e, "dropping malformed CSV row"),
        }
    }

    let column = select_column(&headers, &rows);
    let series = match column {
        Some(idx) => collect_column(&rows, idx),
        None => Vec::new(),
    };

    if series.is_empty() {
        warn!("no usable numeric column in upload, using default series");
        return EdaSeries::new(DEFAULT_SERIES.to_vec());
    }
    EdaSeries::new(series)
}

/// Parse a CSV file from disk
pub fn read_eda_csv_path<P: AsRef<Path>>(path: P) -> Result<EdaSeries> {
    read_eda_csv(File::open(path)?)
}

/// Pick the column index: named EDA column first, else first numeric column
fn select_column(headers: &csv::StringRecord, rows: &[csv::StringRecord]) -> Option<usize> {
    if let Some(idx) = headers
        .iter()
        .position(|h| EDA_COLUMN_NAMES.contains(&h.trim().to_lowercase().as_str()))
    {
        return Some(idx);
    }

    // First column whose first non-empty cell parses as a number
    let width = headers.len();
    for idx in 0..width {
        let first_cell = rows
            .iter()
            .filter_map(|r| r.get(idx))
            .find(|c| !c.trim().is_empty());
        if let Some(cell) = first_cell {
            if cell.trim().parse::<f64>().is_ok() {
                return Some(idx);
            }
        }
    }
    None
}

/// Coercion-with-drop over one column
fn collect_column(rows: &[csv::StringRecord], idx: usize) -> Vec<f64> {
    rows.iter()
        .filter_map(|r| r.get(idx))
        .filter_map(|cell| cell.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_eda_column_is_preferred() {
        let csv = "t,heart_rate,EDA\n0,70,0.41\n1,72,0.45\n2,71,0.43\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &[0.41, 0.45, 0.43]);
    }

    #[test]
    fn test_column_name_matching_is_case_insensitive_and_trimmed() {
        let csv = "t, Gsr \n0,0.5\n1,0.6\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &[0.5, 0.6]);
    }

    #[test]
    fn test_falls_back_to_first_numeric_column() {
        let csv = "label,value\nfoo,1.5\nbar,2.5\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        // "label" is non-numeric, "value" is the first numeric column
        assert_eq!(series.as_slice(), &[1.5, 2.5]);
    }

    #[test]
    fn test_no_numeric_column_yields_default_series() {
        let csv = "name,city\nalice,paris\nbob,dakar\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &DEFAULT_SERIES);
    }

    #[test]
    fn test_unparseable_cells_are_dropped() {
        let csv = "eda\n0.4\nn/a\n0.5\n\n0.6\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &[0.4, 0.5, 0.6]);
    }

    #[test]
    fn test_all_cells_unparseable_yields_default_series() {
        let csv = "eda\nn/a\nmissing\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &DEFAULT_SERIES);
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let csv = "t,eda\n0,0.4\n1\n2,0.6\n";
        let series = read_eda_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &[0.4, 0.6]);
    }
}
