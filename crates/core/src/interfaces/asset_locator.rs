//! Asset locator interface
//!
//! Resolves the CSS file shipped inside an installed dependency.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Relative paths probed inside a package directory, in priority order
pub const CSS_CANDIDATES: [&str; 4] = [
    "index.css",
    "dist/index.css",
    "css/index.css",
    "styles/index.css",
];

/// Stylesheet found for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedAsset {
    pub path: PathBuf,
    pub contents: String,
}

/// Trait for locating a package's CSS asset
pub trait AssetLocator: Send + Sync {
    /// Return the raw text of the first existing candidate stylesheet of
    /// `package_name` under `project_root`.
    ///
    /// Fails with `Error::AssetNotFound` when the package or every candidate
    /// is missing, and with `Error::ReadFailure` when a candidate exists but
    /// cannot be read.
    fn locate(&self, package_name: &str, project_root: &Path) -> Result<LocatedAsset>;
}
