//! Line-local heuristics for deciding whether the cursor sits inside a
//! `class` / `className` attribute value.
//!
//! Only the text of the current line up to the cursor is inspected. Quotes
//! and braces are not balanced across lines, so a multi-line attribute value
//! is missed and a string that merely contains `class="` is accepted.

use regex::Regex;
use std::sync::LazyLock;

/// `class="`, `class='`, `class={` (or `className…`) followed by an unterminated value
static CLASS_ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class(Name)?=["'{][^"'{]*$"#).unwrap());

/// Characters that open an attribute value literal
pub const LITERAL_OPENERS: [char; 3] = ['"', '\'', '{'];

/// True when `line_prefix` ends inside an unterminated class attribute value.
pub fn is_class_attribute_context(line_prefix: &str) -> bool {
    CLASS_ATTRIBUTE_RE.is_match(line_prefix)
}

/// True when the last character of `line_prefix` opens a quoted or braced literal.
pub fn is_inside_literal(line_prefix: &str) -> bool {
    line_prefix.ends_with(LITERAL_OPENERS)
}
