use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelcase_catalog::NewMovie;
use reelcase_db::StoreError;
use reelcase_omdb::{Credentials, OmdbClient, OmdbError};

use crate::CliError;

use super::{open_session, open_store};

pub(crate) fn run_add(
    db_path: Option<PathBuf>,
    profile: &str,
    title: &str,
    year: Option<i32>,
    rating: Option<f64>,
    poster: Option<String>,
) -> Result<(), CliError> {
    let movie = match (year, rating) {
        (Some(year), Some(rating)) => {
            validate_rating(rating)?;
            NewMovie {
                title: title.to_string(),
                year,
                rating,
                poster_url: poster,
            }
        }
        (None, None) => {
            if poster.is_some() {
                return Err(CliError::invalid_input(
                    "--poster only applies to manual entry (with --year and --rating)",
                ));
            }
            lookup_movie(title)?
        }
        _ => {
            return Err(CliError::invalid_input(
                "Manual entry needs both --year and --rating",
            ));
        }
    };

    let conn = open_store(db_path)?;
    let session = open_session(&conn, profile)?;

    match session.add(&movie) {
        Ok(()) => {
            log::info!(
                "{} Added '{}' ({}), rated {:.1}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                movie.title.if_supports_color(Stdout, |t| t.bold()),
                movie.year,
                movie.rating,
            );
            Ok(())
        }
        Err(StoreError::DuplicateTitle { title }) => Err(CliError::invalid_input(format!(
            "'{}' is already in profile '{}'",
            title, profile,
        ))),
        Err(e) => Err(CliError::database(format!("Failed to add movie: {}", e))),
    }
}

pub(crate) fn validate_rating(rating: f64) -> Result<(), CliError> {
    if (0.0..=10.0).contains(&rating) {
        Ok(())
    } else {
        Err(CliError::invalid_input(
            "Rating must be between 0.0 and 10.0",
        ))
    }
}

/// Fetch metadata for a title from OMDb, behind a spinner.
fn lookup_movie(title: &str) -> Result<NewMovie, CliError> {
    let creds = Credentials::load().map_err(|e| {
        CliError::config(format!(
            "{}. Run 'reelcase config setup' to store an API key",
            e
        ))
    })?;
    let client = OmdbClient::new(creds).map_err(|e| CliError::api(e.to_string()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(format!("Looking up '{}' on OMDb...", title));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = client.lookup_title(title);
    pb.finish_and_clear();

    result.map_err(|e| match e {
        OmdbError::NotFound { title } => CliError::api(format!(
            "No OMDb entry found for '{}'. Check the spelling, or use --year/--rating for manual entry",
            title,
        )),
        other => CliError::api(other.to_string()),
    })
}
