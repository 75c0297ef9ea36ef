use std::path::PathBuf;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "CPS_STANDARDS_DIR";

/// Get the default standards root directory.
///
/// Checks the `CPS_STANDARDS_DIR` environment variable first, then falls
/// back to the `standards/` directory at the workspace root.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}
