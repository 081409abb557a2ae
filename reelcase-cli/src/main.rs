//! reelcase CLI
//!
//! Command-line interface for tracking per-profile movie collections.

mod cli_types;
mod commands;
mod error;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.db;
    let profile = cli.profile;

    match cli.command {
        Commands::Add {
            title,
            year,
            rating,
            poster,
        } => commands::add::run_add(db, &profile, &title, year, rating, poster),
        Commands::List => commands::list::run_list(db, &profile),
        Commands::Remove { title, yes } => commands::remove::run_remove(db, &profile, &title, yes),
        Commands::Rate { title, rating } => commands::rate::run_rate(db, &profile, &title, rating),
        Commands::Search { term } => commands::search::run_search(db, &profile, &term),
        Commands::Top => commands::top::run_top(db, &profile),
        Commands::Random => commands::random::run_random(db, &profile),
        Commands::Stats => commands::stats::run_stats(db, &profile),
        Commands::Export { out } => commands::export::run_export(db, &profile, out),
        Commands::Profiles => commands::profiles::run_profiles(db),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Setup => commands::config::run_config_setup(),
            ConfigAction::Test => commands::config::run_config_test(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

/// Set up the logger that carries all user-facing output.
///
/// Info-level records print as plain lines on stdout; warnings and errors
/// get a prefix. `--verbose` adds debug records, `--quiet` drops everything
/// below warn.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            use std::io::Write;
            match record.level() {
                log::Level::Info => writeln!(buf, "{}", record.args()),
                log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
                log::Level::Error => writeln!(buf, "error: {}", record.args()),
                _ => writeln!(buf, "[{}] {}", record.level(), record.args()),
            }
        })
        .init();
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
