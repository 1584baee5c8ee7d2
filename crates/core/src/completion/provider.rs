use tracing::trace;

use crate::{
    catalog::ClassCatalog,
    completion::{CompletionItem, CompletionList},
    matcher::{is_class_attribute_context, is_inside_literal},
    types::LanguageId,
};

/// Characters that should make the editor ask for completions
pub const TRIGGER_CHARACTERS: [char; 3] = ['"', '\'', '{'];

/// Offer every catalog entry when `line_prefix` ends inside a class attribute.
///
/// Returns `None` outside an attribute context, so the editor falls back to
/// its other providers. Items keep catalog order and always insert the bare
/// class name; `inside_literal` is only set for JSX languages, where a host
/// may decide whether to wrap it.
pub fn provide_completions(
    catalog: &ClassCatalog,
    language: LanguageId,
    line_prefix: &str,
) -> Option<CompletionList> {
    if !is_class_attribute_context(line_prefix) {
        trace!("Not in a class attribute context for {}", language);
        return None;
    }

    let inside_literal = language.is_jsx() && is_inside_literal(line_prefix);

    let items = catalog
        .iter()
        .map(|(class_name, block)| CompletionItem::for_class(class_name, block))
        .collect();

    Some(CompletionList {
        inside_literal,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::extract;

    fn catalog() -> ClassCatalog {
        extract(".mint-btn { color: green; } .mint-card { padding: 8px; } .mint-text { font-size: 14px; }")
    }

    #[test]
    fn test_all_entries_offered_in_order() {
        let list = provide_completions(&catalog(), LanguageId::Html, r#"<div class=""#).unwrap();

        let labels: Vec<_> = list.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["mint-btn", "mint-card", "mint-text"]);
    }

    #[test]
    fn test_literal_detection_only_for_jsx() {
        let list = provide_completions(&catalog(), LanguageId::Html, r#"<div class=""#).unwrap();
        assert!(!list.inside_literal);

        let list = provide_completions(&catalog(), LanguageId::Typescript, "<div className='").unwrap();
        assert!(!list.inside_literal);

        let list = provide_completions(&catalog(), LanguageId::JavascriptReact, r#"<div className=""#).unwrap();
        assert!(list.inside_literal);
    }

    #[test]
    fn test_outside_attribute_context() {
        assert!(provide_completions(&catalog(), LanguageId::Html, r#"<div id=""#).is_none());
        assert!(provide_completions(&catalog(), LanguageId::TypescriptReact, "const x = ").is_none());
    }

    #[test]
    fn test_jsx_literal_detection() {
        let list = provide_completions(&catalog(), LanguageId::TypescriptReact, "<div className={").unwrap();
        assert!(list.inside_literal);

        let list =
            provide_completions(&catalog(), LanguageId::JavascriptReact, "<div className={cx(").unwrap();
        assert!(!list.inside_literal);
        // The bare class name is inserted either way
        assert_eq!(list.items[0].insert_text, "mint-btn");
    }

    #[test]
    fn test_empty_catalog_yields_empty_list() {
        let list = provide_completions(&ClassCatalog::new(), LanguageId::Html, "<p class='").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_trigger_characters_open_values() {
        for trigger in TRIGGER_CHARACTERS {
            let prefix = format!("<div className={trigger}");
            assert!(provide_completions(&catalog(), LanguageId::JavascriptReact, &prefix).is_some());
        }
    }

    #[test]
    fn test_documentation_carries_block() {
        let list = provide_completions(&catalog(), LanguageId::Html, r#"<p class="mint-"#).unwrap();

        assert_eq!(list.items[1].documentation, "```css\npadding: 8px;\n```");
    }
}
