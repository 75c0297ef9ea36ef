use serde::{Deserialize, Serialize};

/// Summary statistics for one variable, parsed from a tabstat line.
///
/// All fields are `f64`; a stat token that failed to parse is carried as
/// NaN rather than rejecting the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub n: f64,
}
