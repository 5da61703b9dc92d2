//! Catalog resolution: `--catalog`, then `DESIGN_CATALOG_DIR`, then the
//! catalog compiled into the binary.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use catalog_standards::paths::catalog_dir_from_env;
use catalog_standards::{CATALOG_ENV_VAR, Catalog};

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Flag(PathBuf),
    Env(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogOrigin::Flag(dir) => write!(f, "{} (--catalog)", dir.display()),
            CatalogOrigin::Env(dir) => write!(f, "{} (${CATALOG_ENV_VAR})", dir.display()),
            CatalogOrigin::Builtin => f.write_str("built-in catalog"),
        }
    }
}

/// Pick the catalog source without loading it.
pub fn resolve_origin(flag: Option<&Path>, env_dir: Option<PathBuf>) -> CatalogOrigin {
    match (flag, env_dir) {
        (Some(dir), _) => CatalogOrigin::Flag(dir.to_path_buf()),
        (None, Some(dir)) => CatalogOrigin::Env(dir),
        (None, None) => CatalogOrigin::Builtin,
    }
}

/// Load the catalog named by `origin`; directories are verified against their manifest.
pub fn load(origin: &CatalogOrigin) -> Result<Catalog> {
    let catalog = match origin {
        CatalogOrigin::Flag(dir) | CatalogOrigin::Env(dir) => {
            let (catalog, _summary) = Catalog::verify_and_load(dir)
                .with_context(|| format!("load catalog from {origin}"))?;
            catalog
        }
        CatalogOrigin::Builtin => Catalog::builtin().context("load built-in catalog")?,
    };
    info!(
        origin = %origin,
        tokens = catalog.tokens.len(),
        components = catalog.registry.len(),
        "catalog ready"
    );
    Ok(catalog)
}

/// Resolve and load the catalog for a command.
pub fn load_catalog(flag: Option<&Path>) -> Result<Catalog> {
    load(&resolve_origin(flag, catalog_dir_from_env()))
}
