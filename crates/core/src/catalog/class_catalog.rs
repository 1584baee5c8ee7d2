use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from CSS class name to its normalized declaration block.
///
/// Keys keep the position of their first occurrence in the source text.
/// Re-inserting an existing key replaces the block in place, so the last
/// definition of a class wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCatalog {
    entries: IndexMap<String, String>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the block for `class_name`, returning the previous block.
    pub fn insert(&mut self, class_name: impl Into<String>, block: impl Into<String>) -> Option<String> {
        self.entries.insert(class_name.into(), block.into())
    }

    pub fn get(&self, class_name: &str) -> Option<&str> {
        self.entries.get(class_name).map(String::as_str)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, block)| (name.as_str(), block.as_str()))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ClassCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut catalog = ClassCatalog::new();
        for (name, block) in iter {
            catalog.insert(name, block);
        }
        catalog
    }
}
