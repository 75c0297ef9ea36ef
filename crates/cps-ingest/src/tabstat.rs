//! Tabstat summary-statistics extraction.
//!
//! Input is the text Stata's `tabstat` prints: one variable per line as
//! `NAME | mean min max n ...`, framed by header and divider lines.

use std::path::Path;

use anyhow::{Context, Result};
use cps_model::StatRecord;

pub fn read_tabstat(path: &Path) -> Result<Vec<StatRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read statistics: {}", path.display()))?;
    Ok(parse_tabstat(&text))
}

/// Extract stat records, preserving input line order.
///
/// A line contributes a record only if it has a `|` separator, is not a
/// header or divider line (contains `Variable` or `----`), and its
/// second pipe segment splits into at least four whitespace tokens.
pub fn parse_tabstat(text: &str) -> Vec<StatRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        if !line.contains('|') || line.contains("Variable") || line.contains("----") {
            continue;
        }
        let mut segments = line.split('|');
        let name = segments.next().unwrap_or("").trim();
        let Some(stats_segment) = segments.next() else {
            continue;
        };
        let tokens: Vec<&str> = stats_segment.split_whitespace().collect();
        if tokens.len() < 4 {
            continue;
        }
        records.push(StatRecord {
            name: name.to_string(),
            mean: parse_stat(tokens[0]),
            min: parse_stat(tokens[1]),
            max: parse_stat(tokens[2]),
            n: parse_stat(tokens[3]),
        });
    }
    records
}

/// Whole-token float parse; anything else becomes NaN and flows on.
fn parse_stat(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}
