use anyhow::Result;
use tracing::debug;

use super::{open_session, resolve_cwd};
use crate::display::{print_catalog, print_load_report};

pub fn classes_command(cwd: Option<&str>, package: Option<&str>, verbose: bool) -> Result<()> {
    let dir = resolve_cwd(cwd)?;
    debug!("Listing classes for: {}", dir.display());

    let suggestor = open_session(&dir, package)?;
    let report = suggestor.activate();
    let snapshot = suggestor.snapshot();

    if verbose {
        // Failures still go to stderr so stdout stays valid JSON
        if !report.is_ok() {
            print_load_report(&report);
        }
        println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    } else {
        print_load_report(&report);
        print_catalog(&snapshot);
    }

    Ok(())
}
