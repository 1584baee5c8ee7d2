//! Single-pass extraction of top-level class rules from raw CSS text.
//!
//! The scanner is a regular expression, not a CSS parser: at-rules, nesting
//! and compound selectors are not understood. A block ends at the first `}`
//! after the selector, so nested braces truncate the body.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::ClassCatalog;

/// `.name { body }` with the body running up to the first closing brace
static CLASS_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([a-zA-Z0-9_-]+)\s*\{([^}]*)\}").unwrap());

/// Extract every top-level single-class rule from `css_text`.
///
/// Matches are found leftmost-first without overlap. Rules whose body is
/// empty after trimming are skipped, and a class defined more than once
/// keeps the body of its last definition. Malformed input never fails; it
/// only yields fewer entries.
pub fn extract(css_text: &str) -> ClassCatalog {
    let mut catalog = ClassCatalog::new();

    for caps in CLASS_RULE_RE.captures_iter(css_text) {
        let (Some(rule), Some(name), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        if !starts_rule(&css_text[..rule.start()]) {
            trace!("Skipping compound selector ending in .{}", name.as_str());
            continue;
        }

        let body = body.as_str().trim();
        if name.as_str().is_empty() || body.is_empty() {
            continue;
        }

        if catalog
            .insert(name.as_str(), normalize_block(body))
            .is_some()
        {
            trace!("Class .{} redefined, keeping later block", name.as_str());
        }
    }

    debug!("Found {} classes", catalog.len());
    catalog
}

/// Put each semicolon-terminated declaration on its own line.
pub fn normalize_block(body: &str) -> String {
    body.replace(';', ";\n")
}

/// Whether a selector starting after `preceding` is the first selector of a rule.
fn starts_rule(preceding: &str) -> bool {
    let preceding = preceding.trim_end();
    preceding.is_empty() || preceding.ends_with(['}', '{', ';']) || preceding.ends_with("*/")
}
