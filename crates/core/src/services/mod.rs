//! Service implementations of the interface traits

pub mod node_modules_locator;
pub mod static_locator;

pub use node_modules_locator::NodeModulesLocator;
pub use static_locator::StaticLocator;
