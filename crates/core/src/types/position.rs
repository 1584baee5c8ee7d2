use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based cursor position in a document.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    /// One-based `line:column`, the way editors show it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.line.saturating_add(1),
            self.character.saturating_add(1)
        )
    }
}
