//! Integration test for the activation -> completion -> package switch flow

use css_suggestor_core::{
    CssSuggestor, Error, LanguageId, Position, extract, is_class_attribute_context,
    is_inside_literal,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("package.json"), r#"{ "name": "app" }"#).unwrap();
    write(
        root,
        "node_modules/@groww-tech/mint-css/css/index.css",
        ".mint-row { display: flex; gap: 8px; }\n.mint-col { flex: 1; }\n.mint-row > .mint-col { margin: 0; }\n",
    );
    write(
        root,
        "node_modules/@acme/ui/styles/index.css",
        ".acme-btn{color:red;padding:2px;}",
    );
    temp_dir
}

#[test]
fn test_session_flow() {
    let workspace = workspace();
    let root = workspace.path();
    write(
        root,
        "src/Card.tsx",
        "export const Card = () => (\n  <div className='mint-'>\n);\n",
    );

    let mut suggestor = CssSuggestor::with_path(&root.join("src/Card.tsx")).unwrap();
    assert_eq!(suggestor.project_root(), Some(root));

    let report = suggestor.activate();
    assert!(report.is_ok());
    assert_eq!(report.class_count, 2);
    assert!(report.asset_path.unwrap().ends_with("css/index.css"));

    let list = suggestor
        .complete_at(&root.join("src/Card.tsx"), Position::new(1, 23), None)
        .unwrap()
        .expect("cursor is inside className value");
    let labels: Vec<_> = list.items.iter().map(|item| item.label.clone()).collect();
    assert_eq!(labels, vec!["mint-row", "mint-col"]);
    assert_eq!(
        list.items[0].documentation,
        "```css\ndisplay: flex;\n gap: 8px;\n```"
    );

    let report = suggestor.set_package("@acme/ui").unwrap();
    assert_eq!(report.class_count, 1);
    let snapshot = suggestor.snapshot();
    assert_eq!(
        snapshot.classes.get("acme-btn"),
        Some("color:red;\npadding:2px;\n")
    );

    let path = suggestor.save_config().unwrap();
    assert_eq!(path, root.join(".css-suggestor.json"));

    let reopened = CssSuggestor::with_path(root).unwrap();
    assert_eq!(reopened.config().package, "@acme/ui");
}

#[test]
fn test_missing_dependency_degrades_to_no_suggestions() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

    let suggestor = CssSuggestor::with_path(temp_dir.path()).unwrap();
    let report = suggestor.activate();

    assert!(matches!(report.error, Some(Error::AssetNotFound { .. })));
    let list = suggestor
        .complete(LanguageId::Html.as_str(), r#"<span class=""#)
        .unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_core_predicates() {
    assert!(is_class_attribute_context(r#"<div class=""#));
    assert!(is_class_attribute_context("<div className={"));
    assert!(!is_class_attribute_context(r#"<div id=""#));
    assert!(is_class_attribute_context(r#"<div class="foo"#));
    assert!(is_inside_literal(r#"class=""#));
    assert!(!is_inside_literal("class="));

    let catalog = extract(".btn{color:red;padding:2px;}");
    assert_eq!(catalog.get("btn"), Some("color:red;\npadding:2px;\n"));
    assert!(extract(".a.b { color: red; }").is_empty());
}
