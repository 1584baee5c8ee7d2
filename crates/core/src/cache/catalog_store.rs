use arc_swap::ArcSwap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::{
    catalog::{ClassCatalog, extract},
    error::{Error, Result},
    interfaces::AssetLocator,
    services::NodeModulesLocator,
};

/// The active package together with the catalog built from it.
///
/// Published as one unit so readers never pair a package name with another
/// package's classes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_path: Option<PathBuf>,
    pub classes: ClassCatalog,
}

/// Outcome of a load request
#[derive(Debug)]
pub struct LoadReport {
    pub package: String,
    pub asset_path: Option<PathBuf>,
    pub class_count: usize,
    /// Why the store fell back to an empty catalog
    pub error: Option<Error>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// User-facing summary of the load
    pub fn message(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => format!("Loaded {} classes from {}", self.class_count, self.package),
        }
    }
}

/// Holds the class catalog for the session.
///
/// A load builds the new catalog completely before swapping it in, so
/// concurrent readers observe either the previous snapshot or the new one.
/// Loads are serialized; there is a single writer at a time.
pub struct CatalogStore {
    current: ArcSwap<CatalogSnapshot>,
    locator: Box<dyn AssetLocator>,
    writer: Mutex<()>,
}

impl CatalogStore {
    pub fn new(locator: Box<dyn AssetLocator>) -> Self {
        Self {
            current: ArcSwap::from_pointee(CatalogSnapshot::default()),
            locator,
            writer: Mutex::new(()),
        }
    }

    /// Store backed by the `node_modules` locator
    pub fn with_node_modules() -> Self {
        Self::new(Box::new(NodeModulesLocator::new()))
    }

    /// Current snapshot; cheap to take and safe to hold across reloads
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.load_full()
    }

    pub fn locator(&self) -> &dyn AssetLocator {
        self.locator.as_ref()
    }

    pub fn package(&self) -> String {
        self.current.load().package.clone()
    }

    /// Rebuild the catalog for `package` and publish it.
    ///
    /// Never fails: when the stylesheet cannot be found or read an empty
    /// catalog is published and the error is returned in the report.
    pub fn load(&self, package: &str, project_root: Option<&Path>) -> LoadReport {
        let _guard = self.writer.lock().unwrap_or_else(|e| e.into_inner());

        info!("Scanning {} for CSS classes...", package);

        let snapshot = match self.build(package, project_root) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("Failed to load classes from {}: {}", package, error);
                self.current.store(Arc::new(CatalogSnapshot {
                    package: package.to_string(),
                    asset_path: None,
                    classes: ClassCatalog::new(),
                }));
                return LoadReport {
                    package: package.to_string(),
                    asset_path: None,
                    class_count: 0,
                    error: Some(error),
                };
            }
        };

        let report = LoadReport {
            package: package.to_string(),
            asset_path: snapshot.asset_path.clone(),
            class_count: snapshot.classes.len(),
            error: None,
        };
        self.current.store(Arc::new(snapshot));

        info!("{}", report.message());
        report
    }

    fn build(&self, package: &str, project_root: Option<&Path>) -> Result<CatalogSnapshot> {
        let project_root = project_root.ok_or(Error::NoWorkspace)?;
        let asset = self.locator.locate(package, project_root)?;

        Ok(CatalogSnapshot {
            package: package.to_string(),
            classes: extract(&asset.contents),
            asset_path: Some(asset.path),
        })
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("current", &self.current.load_full())
            .finish_non_exhaustive()
    }
}
