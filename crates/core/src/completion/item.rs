use serde::{Deserialize, Serialize};

/// Kind reported to the editor for a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Value,
}

/// A single class suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionItemKind,
    pub detail: String,
    /// Markdown with the declaration block in a `css` code fence
    pub documentation: String,
    pub insert_text: String,
}

impl CompletionItem {
    pub fn for_class(class_name: &str, block: &str) -> Self {
        Self {
            label: class_name.to_string(),
            kind: CompletionItemKind::Value,
            detail: format!("{class_name} - Mint CSS class"),
            documentation: css_code_block(block),
            insert_text: class_name.to_string(),
        }
    }
}

/// Suggestions for one completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// The cursor directly follows the quote or brace opening the value
    pub inside_literal: bool,
    pub items: Vec<CompletionItem>,
}

impl CompletionList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn css_code_block(block: &str) -> String {
    let block = block.strip_suffix('\n').unwrap_or(block);
    format!("```css\n{block}\n```")
}
