use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_store;

pub(crate) fn run_profiles(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let conn = open_store(db_path)?;

    let names = reelcase_db::list_profiles(&conn)
        .map_err(|e| CliError::database(format!("Failed to list profiles: {}", e)))?;

    if names.is_empty() {
        log::info!(
            "{}",
            "No profiles yet.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Any command run with --profile <name> creates one.");
        return Ok(());
    }

    log::info!("Known profiles:");
    for name in &names {
        log::info!("  {}", name.if_supports_color(Stdout, |t| t.bold()));
    }

    Ok(())
}
