//! Audit report models.

use serde::{Deserialize, Serialize};

use crate::provenance::OriginMap;

/// One variable whose observed min/max fall outside the documented range.
///
/// `issue` carries the minimum-violation message first; when the maximum
/// also trips in the same validation pass, its message is appended after
/// `" AND "`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeViolation {
    pub variable: String,
    pub data_min: f64,
    pub data_max: f64,
    pub valid_min: f64,
    pub valid_max: f64,
    pub description: String,
    pub issue: String,
}

/// Full audit result: range violations plus both provenance maps.
///
/// `derived` holds every variable with a matching "created from" note;
/// the text report does not print it, but it stays part of the API and
/// the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub out_of_range: Vec<RangeViolation>,
    pub derived: OriginMap,
    pub suspicious: OriginMap,
}

impl AuditReport {
    pub fn out_of_range_count(&self) -> usize {
        self.out_of_range.len()
    }

    /// Count of watchlist variables found in the codebook, resolved or not.
    pub fn suspicious_count(&self) -> usize {
        self.suspicious.len()
    }

    pub fn has_range_problems(&self) -> bool {
        !self.out_of_range.is_empty()
    }
}
