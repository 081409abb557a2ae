//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reelcase")]
#[command(about = "Track per-profile movie collections from the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Path to the movie database (default: <data dir>/reelcase/movies.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Profile whose collection to operate on (created on first use)
    #[arg(short, long, global = true, default_value = "default")]
    pub profile: String,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a movie, fetching metadata from OMDb by default
    Add {
        /// Movie title
        title: String,

        /// Release year (manual entry; requires --rating)
        #[arg(long)]
        year: Option<i32>,

        /// Rating from 0.0 to 10.0 (manual entry; requires --year)
        #[arg(long)]
        rating: Option<f64>,

        /// Poster image URL (manual entry only)
        #[arg(long)]
        poster: Option<String>,
    },

    /// List the profile's movies
    List,

    /// Remove a movie by title
    Remove {
        /// Exact title of the movie to remove
        title: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Change a movie's rating
    Rate {
        /// Exact title of the movie to re-rate
        title: String,

        /// New rating from 0.0 to 10.0
        rating: f64,
    },

    /// Search titles by substring (case-insensitive)
    Search {
        /// Part of a title to look for
        term: String,
    },

    /// Show the collection ranked by rating, best first
    Top,

    /// Pick a movie for tonight at random
    Random,

    /// Show rating statistics for the collection
    Stats,

    /// Generate a static HTML page for the collection
    Export {
        /// Output directory (default: ./website)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List all known profiles
    Profiles,

    /// Manage OMDb API key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current API key and its source
    Show,

    /// Interactively set up the API key
    Setup,

    /// Test the API key against the OMDb API
    Test,

    /// Print the config file path
    Path,
}
