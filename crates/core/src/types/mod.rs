pub mod language;
pub mod position;

// Re-export commonly used types
pub use language::LanguageId;
pub use position::Position;
