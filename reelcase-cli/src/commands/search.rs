use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_search(
    db_path: Option<PathBuf>,
    profile: &str,
    term: &str,
) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let hits = session
        .search(term)
        .map_err(|e| CliError::database(format!("Search failed: {}", e)))?;

    if hits.is_empty() {
        log::info!(
            "{}",
            format!("No titles matching '{}'.", term).if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for hit in &hits {
        log::info!(
            "  {}: {:.1}",
            hit.title.if_supports_color(Stdout, |t| t.bold()),
            hit.rating,
        );
    }

    Ok(())
}
