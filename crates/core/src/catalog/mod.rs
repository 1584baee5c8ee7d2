//! Class catalog: CSS class names mapped to their declaration blocks

pub mod class_catalog;
pub mod extractor;

pub use class_catalog::ClassCatalog;
pub use extractor::{extract, normalize_block};
