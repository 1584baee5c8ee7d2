//! Completion items built from the class catalog

pub mod item;
pub mod provider;

pub use item::{CompletionItem, CompletionItemKind, CompletionList};
pub use provider::{TRIGGER_CHARACTERS, provide_completions};
