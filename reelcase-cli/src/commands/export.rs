use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_export(
    db_path: Option<PathBuf>,
    profile: &str,
    out: Option<PathBuf>,
) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let movies = session
        .list()
        .map_err(|e| CliError::database(format!("Failed to list movies: {}", e)))?;

    if movies.is_empty() {
        log::warn!(
            "Nothing to export: profile '{}' has no movies",
            profile,
        );
        return Ok(());
    }

    let out_dir = out.unwrap_or_else(|| PathBuf::from("website"));
    let path = reelcase_site::write_site(profile, &movies, &out_dir)
        .map_err(|e| CliError::export(e.to_string()))?;

    log::info!(
        "{} Website generated at {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}
