#![deny(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

/// Version pin for the CPS documentation the ranges were lifted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pins {
    pub cps: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub kind: String,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn load_manifest(root: &Path) -> Result<Manifest, StandardsError> {
    let path = root.join("manifest.toml");
    let text = std::fs::read_to_string(&path).map_err(|source| StandardsError::io(&path, source))?;
    toml::from_str(&text).map_err(|source| StandardsError::Toml { path, source })
}
