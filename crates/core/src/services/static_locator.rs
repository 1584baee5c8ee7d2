//! In-memory asset locator for embedding hosts and tests

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::interfaces::{AssetLocator, LocatedAsset};
use crate::services::NodeModulesLocator;

/// Serves stylesheets registered ahead of time instead of reading the disk
#[derive(Debug, Default, Clone)]
pub struct StaticLocator {
    assets: HashMap<String, String>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, package_name: impl Into<String>, css: impl Into<String>) -> Self {
        self.assets.insert(package_name.into(), css.into());
        self
    }
}

impl AssetLocator for StaticLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Result<LocatedAsset> {
        let contents = self.assets.get(package_name).ok_or_else(|| {
            Error::asset_not_found(
                package_name,
                format!("Package {package_name} not found in node_modules"),
            )
        })?;

        Ok(LocatedAsset {
            path: NodeModulesLocator::package_dir(project_root, package_name).join("index.css"),
            contents: contents.clone(),
        })
    }
}
