//! Codebook metadata models.
//!
//! A codebook row describes one survey variable: its mnemonic, a
//! human-readable label, and free-text provenance comments. Records keep
//! their file order; duplicate names are allowed and resolved by the
//! lookup (last occurrence wins).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single parsed codebook cell.
///
/// Numeric-looking text is inferred as a number and rendered back
/// through canonical `f64` display, so `"007"` becomes `7` and
/// `"1.50"` becomes `1.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if is_numeric_literal(trimmed)
            && let Ok(value) = trimmed.parse::<f64>()
        {
            return Self::Number(value);
        }
        Self::Text(trimmed.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Render the cell back to text through canonical `f64` display.
    pub fn display_string(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Number(value) => format!("{value}"),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Strict numeric-literal shape: digits with optional sign, decimal
/// point, and exponent. Rejects `inf`/`NaN` spellings that `f64::parse`
/// would otherwise accept.
fn is_numeric_literal(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
        && value
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'))
}

/// One codebook row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodebookRecord {
    /// Variable identifier (CPS mnemonic or a renamed derived name).
    pub name: String,
    /// Human-readable description ("variable label or new name").
    pub label: String,
    /// Free-text provenance notes, absent when the cell is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Mapping from variable name to label, folded from codebook records.
///
/// Built only from rows where both name and label are non-empty; a
/// repeated name keeps the label from its last occurrence in file order.
#[derive(Debug, Clone, Default)]
pub struct VariableLookup {
    map: BTreeMap<String, String>,
}

impl VariableLookup {
    pub fn from_records(records: &[CodebookRecord]) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            if record.name.is_empty() || record.label.is_empty() {
                continue;
            }
            map.insert(record.name.clone(), record.label.clone());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_numbers_and_normalizes_display() {
        assert_eq!(CellValue::infer("007"), CellValue::Number(7.0));
        assert_eq!(CellValue::infer("007").display_string(), "7");
        assert_eq!(CellValue::infer("1.50").display_string(), "1.5");
        assert_eq!(CellValue::infer("-4"), CellValue::Number(-4.0));
        assert_eq!(CellValue::infer("1e2"), CellValue::Number(100.0));
    }

    #[test]
    fn keeps_text_and_missing_cells() {
        assert_eq!(
            CellValue::infer("  Age of person  "),
            CellValue::Text("Age of person".to_string())
        );
        assert!(CellValue::infer("   ").is_missing());
        // f64::parse would accept these; the codebook should not.
        assert_eq!(CellValue::infer("inf"), CellValue::Text("inf".to_string()));
        assert_eq!(CellValue::infer("NaN"), CellValue::Text("NaN".to_string()));
    }

    #[test]
    fn lookup_skips_rows_missing_name_or_label() {
        let records = vec![
            CodebookRecord {
                name: "PESEX".to_string(),
                label: "Sex".to_string(),
                comments: None,
            },
            CodebookRecord {
                name: String::new(),
                label: "orphan label".to_string(),
                comments: None,
            },
            CodebookRecord {
                name: "PEMLR".to_string(),
                label: String::new(),
                comments: Some("created from PEMLR".to_string()),
            },
        ];
        let lookup = VariableLookup::from_records(&records);
        assert_eq!(lookup.len(), 1);
        assert!(lookup.contains("PESEX"));
        assert!(!lookup.contains("PEMLR"));
    }
}
