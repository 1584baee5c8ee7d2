pub mod formatter;

pub use formatter::{format_block, print_catalog, print_load_report};
