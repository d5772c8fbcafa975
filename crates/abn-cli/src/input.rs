//! Batch input loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Read one value per line. Line endings are dropped; blank lines are kept
/// so record numbers match line numbers. A leading UTF-8 byte-order mark is
/// skipped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let text = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
    let values: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), records = values.len(), "loaded line input");
    Ok(values)
}

/// Read the named column from a CSV file with a header row.
///
/// The column name is matched case-insensitively after trimming.
pub fn read_csv_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header row of {}", path.display()))?
        .clone();
    let index = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(column.trim()))
        .ok_or_else(|| anyhow!("column {column:?} not found in {}", path.display()))?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("read row {} of {}", row + 1, path.display()))?;
        values.push(record.get(index).unwrap_or_default().to_string());
    }
    debug!(
        path = %path.display(),
        column,
        records = values.len(),
        "loaded csv input"
    );
    Ok(values)
}
