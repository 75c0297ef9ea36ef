//! Documented valid value ranges for CPS variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Valid range for one CPS mnemonic, from the published documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
    pub description: String,
}

/// Reference table mapping CPS mnemonics to their valid ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    entries: BTreeMap<String, ValidRange>,
}

impl RangeTable {
    pub fn insert(&mut self, name: impl Into<String>, range: ValidRange) {
        self.entries.insert(name.into(), range);
    }

    pub fn get(&self, name: &str) -> Option<&ValidRange> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValidRange)> {
        self.entries.iter()
    }
}
