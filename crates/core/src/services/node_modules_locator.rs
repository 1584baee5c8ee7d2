//! Default asset locator implementation
//!
//! Looks the package up in `<project_root>/node_modules`.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::interfaces::{AssetLocator, CSS_CANDIDATES, LocatedAsset};

/// Locates package stylesheets in an npm `node_modules` tree
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeModulesLocator;

impl NodeModulesLocator {
    pub fn new() -> Self {
        Self
    }

    /// Installed location of `package_name`; scoped names such as
    /// `@scope/name` map to nested directories.
    pub fn package_dir(project_root: &Path, package_name: &str) -> PathBuf {
        project_root.join("node_modules").join(package_name)
    }
}

impl AssetLocator for NodeModulesLocator {
    fn locate(&self, package_name: &str, project_root: &Path) -> Result<LocatedAsset> {
        let package_dir = Self::package_dir(project_root, package_name);

        if !package_dir.is_dir() {
            return Err(Error::asset_not_found(
                package_name,
                format!("Package {package_name} not found in node_modules"),
            ));
        }

        // The first existing candidate is used even if a later one has content
        let found = CSS_CANDIDATES
            .iter()
            .map(|candidate| package_dir.join(candidate))
            .find(|path| path.is_file());

        let Some(path) = found else {
            return Err(Error::asset_not_found(
                package_name,
                format!("No CSS file found in {package_name}"),
            ));
        };

        let contents = read_stylesheet(&path)?;

        if contents.is_empty() {
            return Err(Error::asset_not_found(
                package_name,
                format!("No CSS file found in {package_name}"),
            ));
        }

        debug!("Reading CSS from: {}", path.display());
        Ok(LocatedAsset { path, contents })
    }
}

/// Read a stylesheet, replacing invalid UTF-8 sequences instead of failing
fn read_stylesheet(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_scoped_package_dir() {
        let dir = NodeModulesLocator::package_dir(Path::new("/work"), "@groww-tech/mint-css");
        assert_eq!(dir, PathBuf::from("/work/node_modules/@groww-tech/mint-css"));
    }

    #[test]
    fn test_first_candidate_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "node_modules/ui/dist/index.css", ".dist { a: b; }");
        write(root, "node_modules/ui/styles/index.css", ".styles { a: b; }");

        let asset = NodeModulesLocator::new().locate("ui", root).unwrap();

        assert!(asset.path.ends_with("dist/index.css"));
        assert_eq!(asset.contents, ".dist { a: b; }");
    }

    #[test]
    fn test_root_index_preferred_over_dist() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "node_modules/ui/index.css", ".root { a: b; }");
        write(root, "node_modules/ui/dist/index.css", ".dist { a: b; }");

        let asset = NodeModulesLocator::new().locate("ui", root).unwrap();

        assert_eq!(asset.path, root.join("node_modules/ui/index.css"));
    }

    #[test]
    fn test_missing_package() {
        let temp_dir = TempDir::new().unwrap();

        let err = NodeModulesLocator::new()
            .locate("@groww-tech/mint-css", temp_dir.path())
            .unwrap_err();

        assert!(matches!(err, Error::AssetNotFound { ref package, .. } if package == "@groww-tech/mint-css"));
        assert_eq!(
            err.to_string(),
            "Package @groww-tech/mint-css not found in node_modules"
        );
    }

    #[test]
    fn test_package_without_stylesheet() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "node_modules/ui/package.json", "{}");

        let err = NodeModulesLocator::new().locate("ui", root).unwrap_err();

        assert!(matches!(err, Error::AssetNotFound { .. }));
        assert_eq!(err.to_string(), "No CSS file found in ui");
    }

    #[test]
    fn test_empty_first_candidate_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "node_modules/ui/index.css", "");
        write(root, "node_modules/ui/css/index.css", ".later { a: b; }");

        let err = NodeModulesLocator::new().locate("ui", root).unwrap_err();

        assert!(matches!(err, Error::AssetNotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let path = root.join("node_modules/ui/index.css");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"/* \xa9 2024 */ .btn { color: red; }").unwrap();

        let asset = NodeModulesLocator::new().locate("ui", root).unwrap();

        assert!(asset.contents.contains('\u{FFFD}'));
        assert_eq!(crate::catalog::extract(&asset.contents).get("btn"), Some("color: red;\n"));
    }

    #[test]
    fn test_unreadable_stylesheet_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        // Reading a directory fails with an I/O error
        let path = temp_dir.path().join("index.css");
        fs::create_dir_all(&path).unwrap();

        let err = read_stylesheet(&path).unwrap_err();

        assert!(matches!(err, Error::ReadFailure { path: ref failed, .. } if *failed == path));
        assert!(err.to_string().starts_with("Failed to read "));
    }
}
