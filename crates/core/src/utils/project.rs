use std::path::{Path, PathBuf};

/// Find the JavaScript project root enclosing `from`.
///
/// Walks up from `from` (or its parent when it is a file) until a directory
/// containing `node_modules` or `package.json` is found.
pub fn find_project_root(from: &Path) -> Option<PathBuf> {
    let mut current = if from.is_file() {
        from.parent()?.to_path_buf()
    } else {
        from.to_path_buf()
    };

    loop {
        if current.join("node_modules").is_dir() || current.join("package.json").is_file() {
            return Some(current);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_root_from_nested_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), "{}").unwrap();
        fs::create_dir_all(root.join("src/components")).unwrap();
        let file = root.join("src/components/Button.tsx");
        fs::write(&file, "export {}").unwrap();

        assert_eq!(find_project_root(&file), Some(root.to_path_buf()));
    }

    #[test]
    fn test_node_modules_marks_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("node_modules")).unwrap();
        fs::create_dir_all(root.join("pages")).unwrap();

        assert_eq!(find_project_root(&root.join("pages")), Some(root.to_path_buf()));
    }
}
