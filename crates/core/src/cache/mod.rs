//! Session cache for the active package's class catalog

pub mod catalog_store;

// Re-export the main store types
pub use catalog_store::{CatalogSnapshot, CatalogStore, LoadReport};
