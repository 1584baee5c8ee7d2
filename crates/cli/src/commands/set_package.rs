use anyhow::{Context, Result};
use tracing::info;

use super::{open_session, resolve_cwd};
use crate::display::print_load_report;

pub fn set_package_command(package: &str, cwd: Option<&str>) -> Result<()> {
    let dir = resolve_cwd(cwd)?;
    let mut suggestor = open_session(&dir, None)?;

    let report = suggestor.set_package(package)?;
    let config_path = suggestor
        .save_config()
        .context("Failed to save configuration")?;

    info!("Saved package {} to {}", suggestor.config().package, config_path.display());
    println!(
        "✅ Package set to {} in {}",
        suggestor.config().package,
        config_path.display()
    );
    print_load_report(&report);

    Ok(())
}
