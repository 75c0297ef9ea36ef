pub mod doctor;
pub mod error;
pub mod hash;
pub mod loaders;
pub mod manifest;
pub mod paths;

pub use doctor::{DoctorCounts, DoctorReport, verify_standards};
pub use error::StandardsError;
pub use hash::sha256_hex;
pub use loaders::{
    load_default_suspicious_variables, load_default_valid_ranges, load_suspicious_variables,
    load_valid_ranges,
};
pub use manifest::{Manifest, ManifestFile, Pins, load_manifest};
pub use paths::{STANDARDS_ENV_VAR, default_standards_root};
