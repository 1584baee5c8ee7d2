//! Session facade tying configuration, the catalog store and completion together

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::{
    cache::{CatalogSnapshot, CatalogStore, LoadReport},
    completion::{CompletionList, provide_completions},
    config::{CONFIG_FILE_NAMES, Config},
    error::{Error, Result},
    interfaces::{AssetLocator, LocatedAsset},
    services::NodeModulesLocator,
    types::{LanguageId, Position},
    utils::{find_project_root, line_prefix},
};

/// One editing session: the active package and its loaded classes.
///
/// Construction does not scan anything; call [`CssSuggestor::activate`] to
/// load the configured package.
#[derive(Debug)]
pub struct CssSuggestor {
    project_root: Option<PathBuf>,
    config: Config,
    store: CatalogStore,
}

impl CssSuggestor {
    pub fn new(project_root: Option<PathBuf>, config: Config, locator: Box<dyn AssetLocator>) -> Self {
        Self {
            project_root,
            config,
            store: CatalogStore::new(locator),
        }
    }

    /// Session for the project enclosing `start`, reading its config file
    pub fn with_path(start: &Path) -> Result<Self> {
        let base = if start.is_file() {
            start.parent().unwrap_or(start)
        } else {
            start
        };
        let project_root = find_project_root(base).unwrap_or_else(|| base.to_path_buf());
        debug!("Project root: {}", project_root.display());

        let config = Config::load(&project_root)?;
        Ok(Self::new(
            Some(project_root),
            config,
            Box::new(NodeModulesLocator::new()),
        ))
    }

    /// Use `package` for this session without loading or persisting it
    pub fn with_package(mut self, package: &str) -> Result<Self> {
        self.config.set_package(package)?;
        Ok(self)
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the configured package
    pub fn activate(&self) -> LoadReport {
        self.reload()
    }

    /// Rebuild the catalog from the configured package
    pub fn reload(&self) -> LoadReport {
        self.store.load(&self.config.package, self.project_root())
    }

    /// Switch to `package` and reload
    pub fn set_package(&mut self, package: &str) -> Result<LoadReport> {
        self.config.set_package(package)?;
        Ok(self.reload())
    }

    /// Write the current config next to the project root, returning its path
    pub fn save_config(&self) -> Result<PathBuf> {
        let root = self.project_root().ok_or(Error::NoWorkspace)?;
        let path = CONFIG_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.exists())
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAMES[0]));

        self.config.save_to_file(&path)?;
        Ok(path)
    }

    /// Resolve the stylesheet of the configured package without loading it
    pub fn locate(&self) -> Result<LocatedAsset> {
        let root = self.project_root().ok_or(Error::NoWorkspace)?;
        self.store.locator().locate(&self.config.package, root)
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.store.snapshot()
    }

    /// Suggestions for a line prefix in a document of `language_id`.
    ///
    /// Unsupported languages get no suggestions.
    pub fn complete(&self, language_id: &str, line_prefix: &str) -> Option<CompletionList> {
        let language = LanguageId::from_id(language_id)?;
        let snapshot = self.store.snapshot();
        provide_completions(&snapshot.classes, language, line_prefix)
    }

    /// Suggestions at `position` in `file_path`.
    ///
    /// The language is taken from `language`, or guessed from the extension.
    pub fn complete_at(
        &self,
        file_path: &Path,
        position: Position,
        language: Option<LanguageId>,
    ) -> Result<Option<CompletionList>> {
        let Some(language) = language.or_else(|| LanguageId::from_path(file_path)) else {
            debug!("No supported language for {}", file_path.display());
            return Ok(None);
        };

        let source = std::fs::read_to_string(file_path)?;
        let Some(prefix) = line_prefix(&source, position) else {
            return Ok(None);
        };

        let snapshot = self.store.snapshot();
        Ok(provide_completions(&snapshot.classes, language, prefix))
    }
}
