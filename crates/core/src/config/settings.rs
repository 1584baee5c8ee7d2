use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Package scanned when nothing else is configured
pub const DEFAULT_PACKAGE: &str = "@groww-tech/mint-css";

/// Environment variable that overrides the configured package
pub const PACKAGE_ENV: &str = "CSS_SUGGESTOR_PACKAGE";

/// Config file names, in lookup order within a directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".css-suggestor.json", "css-suggestor.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// npm package whose stylesheet provides the classes
    pub package: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validated()
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Nearest config file at or above `start_path`
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Resolve the effective config for `start_path`, honoring `CSS_SUGGESTOR_PACKAGE`.
    pub fn load(start_path: &Path) -> Result<Self> {
        Self::load_with_override(start_path, std::env::var(PACKAGE_ENV).ok())
    }

    /// Like [`Config::load`] with an explicit package override
    pub fn load_with_override(start_path: &Path, package_override: Option<String>) -> Result<Self> {
        let mut config = match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Loading config from: {}", path.display());
                Self::load_from_file(&path)?
            }
            None => Self::default(),
        };

        if let Some(package) = package_override.filter(|p| !p.trim().is_empty()) {
            debug!("Package overridden by {}: {}", PACKAGE_ENV, package);
            config.set_package(&package)?;
        }

        Ok(config)
    }

    /// Switch the active package
    pub fn set_package(&mut self, package: &str) -> Result<()> {
        let package = package.trim();
        if package.is_empty() {
            return Err(Error::ConfigError("Package name must not be empty".to_string()));
        }
        self.package = package.to_string();
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if self.package.trim().is_empty() {
            return Err(Error::ConfigError("Package name must not be empty".to_string()));
        }
        Ok(self)
    }
}
