//! Catalog directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the catalog directory.
pub const CATALOG_ENV_VAR: &str = "DESIGN_CATALOG_DIR";

/// Catalog directory named by `DESIGN_CATALOG_DIR`, if set.
pub fn catalog_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Get the catalog root directory.
///
/// Resolution order:
/// 1. `DESIGN_CATALOG_DIR` environment variable
/// 2. `data/` directory shipped with this crate
pub fn catalog_root() -> PathBuf {
    catalog_dir_from_env().unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}
