#![deny(unsafe_code)]

use std::path::Path;

use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::loaders::{load_suspicious_variables, load_valid_ranges};
use crate::manifest::{ManifestFile, Pins, load_manifest};

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
    pub counts: DoctorCounts,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub files: usize,
    pub valid_ranges: usize,
    pub watchlist_entries: usize,
}

/// Verify a standards directory against its manifest.
///
/// Every pinned file must exist and hash to its recorded sha256, and
/// both reference CSVs must load.
pub fn verify_standards(root: &Path) -> Result<DoctorReport, StandardsError> {
    let manifest = load_manifest(root)?;
    for file in &manifest.files {
        let path = root.join(&file.path);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(StandardsError::MissingFile { path });
            }
            Err(source) => return Err(StandardsError::io(path, source)),
        };
        let actual = sha256_hex(&bytes);
        if !actual.eq_ignore_ascii_case(&file.sha256) {
            return Err(StandardsError::Sha256Mismatch {
                path,
                expected: file.sha256.clone(),
                actual,
            });
        }
    }

    let ranges = load_valid_ranges(&root.join("cps").join("valid_ranges.csv"))?;
    let watchlist = load_suspicious_variables(&root.join("cps").join("suspicious_variables.csv"))?;

    Ok(DoctorReport {
        schema: "cps-audit.standards-doctor".to_string(),
        schema_version: 1,
        pins: manifest.pins.clone(),
        files: manifest.files.clone(),
        counts: DoctorCounts {
            files: manifest.files.len(),
            valid_ranges: ranges.len(),
            watchlist_entries: watchlist.len(),
        },
    })
}
