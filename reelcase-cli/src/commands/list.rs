use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_list(db_path: Option<PathBuf>, profile: &str) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let movies = session
        .list()
        .map_err(|e| CliError::database(format!("Failed to list movies: {}", e)))?;

    if movies.is_empty() {
        log::info!(
            "{}",
            format!("No movies in profile '{}' yet.", profile)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'reelcase add <title>' to add one.");
        return Ok(());
    }

    log::info!("{} movies in total", movies.len());
    crate::log_blank();
    for (title, entry) in &movies {
        log::info!(
            "  {} ({}): {:.1}",
            title.if_supports_color(Stdout, |t| t.bold()),
            entry.year,
            entry.rating,
        );
    }

    Ok(())
}
