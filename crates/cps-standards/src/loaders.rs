//! Loaders for the shipped CPS reference CSVs.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use cps_model::{RangeTable, ValidRange};

use crate::error::StandardsError;
use crate::paths::default_standards_root;

pub fn load_default_valid_ranges() -> Result<RangeTable, StandardsError> {
    let root = default_standards_root();
    load_valid_ranges(&root.join("cps").join("valid_ranges.csv"))
}

pub fn load_default_suspicious_variables() -> Result<Vec<String>, StandardsError> {
    let root = default_standards_root();
    load_suspicious_variables(&root.join("cps").join("suspicious_variables.csv"))
}

/// Load the documented valid-range table.
///
/// Rows without a variable name are skipped; a bound that does not parse
/// as a number means the shipped data is corrupt and is an error.
pub fn load_valid_ranges(path: &Path) -> Result<RangeTable, StandardsError> {
    let rows = read_csv_rows(path)?;
    let mut table = RangeTable::default();
    for row in rows {
        let name = get_field(&row, "Variable Name");
        if name.is_empty() {
            continue;
        }
        let min = parse_bound(&row, "Valid Min", &name)?;
        let max = parse_bound(&row, "Valid Max", &name)?;
        table.insert(
            name,
            ValidRange {
                min,
                max,
                description: get_field(&row, "Description"),
            },
        );
    }
    Ok(table)
}

/// Load the watchlist of derived names worth tracing, in file order.
pub fn load_suspicious_variables(path: &Path) -> Result<Vec<String>, StandardsError> {
    let rows = read_csv_rows(path)?;
    Ok(rows
        .iter()
        .map(|row| get_field(row, "Variable Name"))
        .filter(|name| !name.is_empty())
        .collect())
}

fn parse_bound(
    row: &BTreeMap<String, String>,
    key: &str,
    variable: &str,
) -> Result<f64, StandardsError> {
    let raw = get_field(row, key);
    raw.parse().map_err(|_| StandardsError::InvalidBound {
        variable: variable.to_string(),
        message: format!("{key} is not numeric: {raw:?}"),
    })
}

/// Read a CSV file into a vector of row maps keyed by header.
fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|source| StandardsError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|error| StandardsError::Csv {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| StandardsError::Csv {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}
