use anyhow::{Result, anyhow};
use css_suggestor_core::LanguageId;
use std::path::Path;
use tracing::debug;

use super::{open_session, resolve_cwd};
use crate::display::print_load_report;
use crate::utils::parser::parse_filepath_with_position;

pub fn complete_command(
    filepath_arg: &str,
    language: Option<&str>,
    package: Option<&str>,
    cwd: Option<&str>,
) -> Result<()> {
    debug!("Completing at: {}", filepath_arg);

    let (filepath, position) = parse_filepath_with_position(filepath_arg);
    let position = position.ok_or_else(|| {
        anyhow!("Missing cursor position in {filepath_arg} (expected FILE:LINE[:COLUMN])")
    })?;

    let file = Path::new(&filepath);
    let absolute_path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::current_dir()?.join(file)
    };

    if !absolute_path.exists() {
        return Err(anyhow!("File not found: {}", absolute_path.display()));
    }

    let language = language.map(str::parse::<LanguageId>).transpose()?;

    let session_dir = match cwd {
        Some(_) => resolve_cwd(cwd)?,
        None => absolute_path.clone(),
    };
    let suggestor = open_session(&session_dir, package)?;

    let report = suggestor.activate();
    if !report.is_ok() {
        print_load_report(&report);
    }

    let completions = suggestor.complete_at(&absolute_path, position, language)?;
    println!("{}", serde_json::to_string_pretty(&completions)?);

    Ok(())
}
