//! Process-wide catalog handle with atomic republishing.
//!
//! Validation borrows a snapshot (`Arc<Catalog>`); a reload builds the next
//! catalog completely before swapping it in, so readers never observe a
//! partially built registry.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::catalog::{Catalog, VerifySummary};
use crate::error::CatalogError;

#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The currently published catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish an already built catalog, returning the previous one.
    pub fn publish(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Verify and load `catalog_dir`, then publish it.
    ///
    /// On failure the published catalog is left untouched.
    pub fn reload_from(&self, catalog_dir: &Path) -> Result<VerifySummary, CatalogError> {
        match Catalog::verify_and_load(catalog_dir) {
            Ok((catalog, summary)) => {
                self.publish(catalog);
                info!(catalog_dir = %catalog_dir.display(), "catalog republished");
                Ok(summary)
            }
            Err(error) => {
                warn!(catalog_dir = %catalog_dir.display(), %error, "catalog reload failed");
                Err(error)
            }
        }
    }
}
