//! Atomic Catalog Publication

use crate::catalog::RuleCatalog;
use crate::CatalogLoadError;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

#[derive(Debug)]
struct Published {
    revision: u64,
    catalog: Arc<RuleCatalog>,
}

/// Shared reference to the active rule catalog.
///
/// The lock only guards the pointer swap; evaluations work on an
/// `Arc<RuleCatalog>` snapshot and never observe a half-replaced catalog.
#[derive(Debug)]
pub struct CatalogHandle {
    published: RwLock<Published>,
}

impl CatalogHandle {
    /// Publish the initial catalog as revision 1
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            published: RwLock::new(Published {
                revision: 1,
                catalog: Arc::new(catalog),
            }),
        }
    }

    /// Current catalog
    pub fn snapshot(&self) -> Arc<RuleCatalog> {
        let published = self.published.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&published.catalog)
    }

    /// Current catalog together with its revision
    pub fn snapshot_with_revision(&self) -> (u64, Arc<RuleCatalog>) {
        let published = self.published.read().unwrap_or_else(PoisonError::into_inner);
        (published.revision, Arc::clone(&published.catalog))
    }

    pub fn revision(&self) -> u64 {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .revision
    }

    /// Replace the active catalog, returning the new revision
    pub fn replace(&self, catalog: RuleCatalog) -> u64 {
        let catalog = Arc::new(catalog);
        let mut published = self.published.write().unwrap_or_else(PoisonError::into_inner);
        published.revision += 1;
        published.catalog = catalog;
        info!(
            "Published rule catalog revision {} ({} rules)",
            published.revision,
            published.catalog.len()
        );
        published.revision
    }

    /// Load a catalog from `path` and publish it.
    ///
    /// On failure the active catalog stays in place.
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<u64, CatalogLoadError> {
        match RuleCatalog::load(path.as_ref()) {
            Ok(catalog) => Ok(self.replace(catalog)),
            Err(e) => {
                warn!(
                    "Rejected catalog reload from {}: {}; keeping revision {}",
                    path.as_ref().display(),
                    e,
                    self.revision()
                );
                Err(e)
            }
        }
    }
}
