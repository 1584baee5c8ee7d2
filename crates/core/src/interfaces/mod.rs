//! Interfaces to collaborators supplied by the host environment
//!
//! The core never touches the file system directly; it asks an
//! [`AssetLocator`] for the stylesheet of the active package.

pub mod asset_locator;

pub use asset_locator::{AssetLocator, LocatedAsset, CSS_CANDIDATES};
