use css_suggestor_core::{CatalogSnapshot, LoadReport};

/// Report the outcome of a load; failures are warnings on stderr, never fatal
pub fn print_load_report(report: &LoadReport) {
    if report.is_ok() {
        println!("✅ {}", report.message());
    } else {
        eprintln!("⚠️  {}", report.message());
    }
}

pub fn print_catalog(snapshot: &CatalogSnapshot) {
    println!("📦 Package: {}", snapshot.package);
    if let Some(path) = &snapshot.asset_path {
        println!("📄 Source: {}", path.display());
    }
    println!("{}", "=".repeat(80));

    if snapshot.classes.is_empty() {
        println!("\n❌ No classes found.");
        return;
    }

    println!("\n🎨 {} class(es):\n", snapshot.classes.len());
    for (i, (class_name, block)) in snapshot.classes.iter().enumerate() {
        println!("{}. .{}", i + 1, class_name);
        println!("{}", format_block(block, "   "));
    }
}

/// Indent each non-empty line of a declaration block
pub fn format_block(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
