use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_top(db_path: Option<PathBuf>, profile: &str) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let ranked = session
        .by_rating()
        .map_err(|e| CliError::database(format!("Failed to rank movies: {}", e)))?;

    if ranked.is_empty() {
        log::info!(
            "{}",
            format!("No movies in profile '{}' yet.", profile)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for (i, movie) in ranked.iter().enumerate() {
        log::info!(
            "  {:>2}. {} ({:.1})",
            i + 1,
            movie.title.if_supports_color(Stdout, |t| t.bold()),
            movie.rating,
        );
    }

    Ok(())
}
