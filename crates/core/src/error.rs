use std::io;
use std::path::PathBuf;

/// Errors that can occur during css-suggestor operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The package directory or every candidate stylesheet is missing
    #[error("{reason}")]
    AssetNotFound { package: String, reason: String },

    /// A candidate stylesheet exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No workspace folder found")]
    NoWorkspace,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    pub fn asset_not_found(package: &str, reason: impl Into<String>) -> Self {
        Error::AssetNotFound {
            package: package.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for css-suggestor operations
pub type Result<T> = std::result::Result<T, Error>;
