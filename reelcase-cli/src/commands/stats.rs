use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelcase_db::StoreError;

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_stats(db_path: Option<PathBuf>, profile: &str) -> Result<(), CliError> {
    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    let stats = match session.stats() {
        Ok(stats) => stats,
        Err(StoreError::EmptyCollection) => {
            log::info!(
                "{}",
                format!("No movies in profile '{}' yet; nothing to report.", profile)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
            return Ok(());
        }
        Err(e) => {
            return Err(CliError::database(format!(
                "Failed to compute statistics: {}",
                e
            )));
        }
    };

    log::info!(
        "{}",
        format!("Statistics for profile '{}'", profile).if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Average rating: {:>5.2}", stats.mean);
    log::info!("  Median rating:  {:>5.2}", stats.median);
    crate::log_blank();

    log::info!("  Best movie(s):");
    for movie in &stats.best {
        log::info!(
            "    {} ({:.1})",
            movie.title.if_supports_color(Stdout, |t| t.bold()),
            movie.rating,
        );
    }
    log::info!("  Worst movie(s):");
    for movie in &stats.worst {
        log::info!(
            "    {} ({:.1})",
            movie.title.if_supports_color(Stdout, |t| t.bold()),
            movie.rating,
        );
    }

    Ok(())
}
