//! css-suggestor - CSS class autocomplete for markup and component files
//!
//! This crate provides functionality to:
//! - Extract top-level class rules and their declaration blocks from a stylesheet
//! - Detect when a cursor sits inside a `class` / `className` attribute value
//! - Locate the stylesheet shipped by an installed npm package
//! - Keep the active package's catalog for a session and turn it into completions
pub mod cache;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod matcher;
pub mod services;
pub mod suggestor;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use cache::{CatalogSnapshot, CatalogStore, LoadReport};
pub use catalog::{ClassCatalog, extract};
pub use completion::{CompletionItem, CompletionList, provide_completions};
pub use config::Config;
pub use interfaces::{AssetLocator, LocatedAsset};
pub use matcher::{is_class_attribute_context, is_inside_literal};
pub use services::{NodeModulesLocator, StaticLocator};
pub use suggestor::CssSuggestor;
