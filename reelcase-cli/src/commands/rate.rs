use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{add::validate_rating, open_session, open_store};

pub(crate) fn run_rate(
    db_path: Option<PathBuf>,
    profile: &str,
    title: &str,
    rating: f64,
) -> Result<(), CliError> {
    validate_rating(rating)?;

    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let changed = session
        .update_rating(title, rating)
        .map_err(|e| CliError::database(format!("Failed to update rating: {}", e)))?;

    if changed == 0 {
        log::warn!("No movie titled '{}' in profile '{}'", title, profile);
    } else {
        log::info!(
            "{} Rating for '{}' updated to {:.1}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            title.if_supports_color(Stdout, |t| t.bold()),
            rating,
        );
    }

    Ok(())
}
