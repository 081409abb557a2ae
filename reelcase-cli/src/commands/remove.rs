use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_remove(
    db_path: Option<PathBuf>,
    profile: &str,
    title: &str,
    yes: bool,
) -> Result<(), CliError> {
    if !yes {
        print!("Remove '{}' from profile '{}'? [y/N] ", title, profile);
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            log::info!("{}", "Cancelled".if_supports_color(Stdout, |t| t.dimmed()));
            return Ok(());
        }
    }

    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let removed = session
        .delete(title)
        .map_err(|e| CliError::database(format!("Failed to remove movie: {}", e)))?;

    if removed == 0 {
        log::warn!("No movie titled '{}' in profile '{}'", title, profile);
    } else {
        log::info!(
            "{} Removed '{}'",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            title.if_supports_color(Stdout, |t| t.bold()),
        );
    }

    Ok(())
}
