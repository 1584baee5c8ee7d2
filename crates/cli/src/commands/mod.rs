pub mod classes;
pub mod complete;
pub mod locate;
pub mod set_package;

pub use classes::classes_command;
pub use complete::complete_command;
pub use locate::locate_command;
pub use set_package::set_package_command;

use anyhow::{Context, Result};
use css_suggestor_core::CssSuggestor;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Resolve `--cwd` (or the current directory) to an absolute path
pub(crate) fn resolve_cwd(cwd: Option<&str>) -> Result<PathBuf> {
    let dir = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    dir.canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", dir.display()))
}

/// Open a session for `dir`, optionally using `package` without persisting it
pub(crate) fn open_session(dir: &Path, package: Option<&str>) -> Result<CssSuggestor> {
    let suggestor = CssSuggestor::with_path(dir)
        .with_context(|| format!("Failed to load configuration for {}", dir.display()))?;

    match package {
        Some(package) => Ok(suggestor.with_package(package)?),
        None => Ok(suggestor),
    }
}
