use anyhow::{Context, Result};

use super::{open_session, resolve_cwd};

pub fn locate_command(cwd: Option<&str>, package: Option<&str>) -> Result<()> {
    let dir = resolve_cwd(cwd)?;
    let suggestor = open_session(&dir, package)?;

    let asset = suggestor
        .locate()
        .with_context(|| format!("Failed to locate CSS for {}", suggestor.config().package))?;

    println!("{}", asset.path.display());
    Ok(())
}
