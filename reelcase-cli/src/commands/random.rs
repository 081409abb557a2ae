use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_random(db_path: Option<PathBuf>, profile: &str) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let pick = session
        .random()
        .map_err(|e| CliError::database(format!("Failed to pick a movie: {}", e)))?;

    match pick {
        Some((title, entry)) => {
            log::info!(
                "Your movie for tonight: {} ({}), rated {:.1}",
                title.if_supports_color(Stdout, |t| t.bold()),
                entry.year,
                entry.rating,
            );
        }
        None => {
            log::info!(
                "{}",
                format!("No movies in profile '{}' to pick from.", profile)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}
