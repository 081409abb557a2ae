use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelcase_omdb::{Credentials, OmdbClient, OmdbError};

use crate::CliError;

/// Mask a secret, showing only the first 2 characters.
fn mask_value(s: &str) -> String {
    if s.len() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", &s[..2])
    }
}

/// Show the current API key and where it comes from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = reelcase_omdb::config_path();
    let source = reelcase_omdb::api_key_source();

    log::info!(
        "{}",
        "OMDb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let source_str = format!("({})", source);
    match Credentials::load() {
        Ok(creds) => {
            log::info!(
                "  {} {} {}",
                "api_key:".if_supports_color(Stdout, |t| t.cyan()),
                mask_value(&creds.api_key),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        Err(_) => {
            log::info!(
                "  {} {} {}",
                "api_key:".if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}

/// Interactively set up the API key.
pub(crate) fn run_config_setup() -> Result<(), CliError> {
    log::info!(
        "{}",
        "OMDb API Key Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("Get a free key at https://www.omdbapi.com/apikey.aspx");
    crate::log_blank();

    let existing = Credentials::load().ok();

    let api_key = loop {
        match existing.as_ref().map(|c| mask_value(&c.api_key)) {
            Some(masked) => print!("  api_key [{}]: ", masked),
            None => print!("  api_key: "),
        }
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let trimmed = input.trim().to_string();

        if trimmed.is_empty() {
            if let Some(ref existing) = existing {
                break existing.api_key.clone();
            }
            log::warn!("This field is required.");
            continue;
        }
        break trimmed;
    };

    let creds = Credentials { api_key };

    match reelcase_omdb::save_to_file(&creds) {
        Ok(path) => {
            crate::log_blank();
            log::info!(
                "{} API key saved to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            Ok(())
        }
        Err(e) => Err(CliError::config(format!("Failed to save API key: {}", e))),
    }
}

/// Test the API key against the OMDb API with a fixed lookup.
pub(crate) fn run_config_test() -> Result<(), CliError> {
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
    pb.set_message("Testing API key against OMDb...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    // Any well-known title works; we only care whether the key is accepted
    let result = client.fetch_title("Casablanca");
    pb.finish_and_clear();

    match result {
        Ok(_) => {
            log::info!(
                "{} API key is valid!",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
            Ok(())
        }
        Err(OmdbError::InvalidApiKey) => Err(CliError::api("API key was rejected by OMDb")),
        Err(e) => Err(CliError::api(format!("Test lookup failed: {}", e))),
    }
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match reelcase_omdb::config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}
