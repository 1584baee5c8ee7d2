//! Configuration management for css-suggestor

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_PACKAGE, PACKAGE_ENV};
