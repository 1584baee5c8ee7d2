use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Document languages that receive class suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Html,
    Javascript,
    Typescript,
    JavascriptReact,
    TypescriptReact,
    TypescriptJsx,
}

impl LanguageId {
    pub const ALL: [LanguageId; 6] = [
        LanguageId::Html,
        LanguageId::Javascript,
        LanguageId::Typescript,
        LanguageId::JavascriptReact,
        LanguageId::TypescriptReact,
        LanguageId::TypescriptJsx,
    ];

    /// Editor language identifier
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::Html => "html",
            LanguageId::Javascript => "javascript",
            LanguageId::Typescript => "typescript",
            LanguageId::JavascriptReact => "javascriptreact",
            LanguageId::TypescriptReact => "typescriptreact",
            LanguageId::TypescriptJsx => "typescriptjsx",
        }
    }

    /// Look up an editor language identifier; unsupported languages yield `None`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(id))
    }

    /// Guess the language of a file from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "html" | "htm" => Some(LanguageId::Html),
            "js" | "mjs" | "cjs" => Some(LanguageId::Javascript),
            "ts" | "mts" | "cts" => Some(LanguageId::Typescript),
            "jsx" => Some(LanguageId::JavascriptReact),
            "tsx" => Some(LanguageId::TypescriptReact),
            _ => None,
        }
    }

    /// React flavoured languages, where values may be JSX expressions
    pub fn is_jsx(self) -> bool {
        self.as_str().contains("react")
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}
