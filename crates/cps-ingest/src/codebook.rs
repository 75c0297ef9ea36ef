//! Codebook loading.
//!
//! The codebook arrives as delimited text with header-labeled columns.
//! The delimiter is auto-detected, rows are parsed best-effort (a bad
//! row is dropped, never fatal), and cells pass through numeric type
//! inference. Only the file read itself can fail.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use cps_model::{CellValue, CodebookRecord};

/// Candidate field delimiters, tried in priority order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b'|', b';'];

const NAME_HEADER: &str = "name";
const LABEL_HEADER: &str = "variable label or new name";
const COMMENTS_HEADER: &str = "comments";

pub fn read_codebook(path: &Path) -> Result<Vec<CodebookRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read codebook: {}", path.display()))?;
    Ok(parse_codebook(&text))
}

/// Pick the field delimiter for `text`.
///
/// Tie-break is pinned: the first candidate that splits the header line
/// into at least two fields wins; comma when none does.
pub fn detect_delimiter(text: &str) -> u8 {
    let header_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    for delimiter in DELIMITER_CANDIDATES {
        if field_count(header_line, delimiter) >= 2 {
            return delimiter;
        }
    }
    b','
}

fn field_count(line: &str, delimiter: u8) -> usize {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(line.as_bytes());
    reader
        .records()
        .next()
        .and_then(|record| record.ok())
        .map(|record| record.len())
        .unwrap_or(0)
}

pub fn parse_codebook(text: &str) -> Vec<CodebookRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = detect_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(normalize_header).collect(),
        Err(error) => {
            warn!(%error, "unreadable codebook header");
            return Vec::new();
        }
    };
    let Some(name_idx) = find_column(&headers, NAME_HEADER) else {
        warn!(column = NAME_HEADER, "codebook has no name column");
        return Vec::new();
    };
    let label_idx = find_column(&headers, LABEL_HEADER);
    let comments_idx = find_column(&headers, COMMENTS_HEADER);
    if label_idx.is_none() {
        warn!(column = LABEL_HEADER, "codebook has no label column");
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                skipped += 1;
                warn!(%error, "skipping unreadable codebook row");
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let name = cell_at(&record, Some(name_idx)).display_string();
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        let label = cell_at(&record, label_idx).display_string();
        let comments = match cell_at(&record, comments_idx) {
            CellValue::Missing => None,
            cell => Some(cell.display_string()),
        };
        records.push(CodebookRecord {
            name,
            label,
            comments,
        });
    }
    let delimiter_char = delimiter as char;
    debug!(
        rows = records.len(),
        skipped,
        delimiter = %delimiter_char,
        "parsed codebook"
    );
    records
}

fn cell_at(record: &csv::StringRecord, idx: Option<usize>) -> CellValue {
    idx.and_then(|i| record.get(i))
        .map(CellValue::infer)
        .unwrap_or(CellValue::Missing)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn find_column(headers: &[String], wanted: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(wanted))
}
