pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod profiles;
pub(crate) mod random;
pub(crate) mod rate;
pub(crate) mod remove;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod top;

use std::path::PathBuf;

use reelcase_db::{Connection, Session};

use crate::CliError;

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".reelcase"))
        .join("reelcase")
        .join("movies.db")
}

/// Open (creating if needed) the movie database.
pub(crate) fn open_store(db_path: Option<PathBuf>) -> Result<Connection, CliError> {
    let path = db_path.unwrap_or_else(default_db_path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    reelcase_db::open_database(&path)
        .map_err(|e| CliError::database(format!("Failed to open movie database: {}", e)))
}

/// Open a session bound to the named profile.
pub(crate) fn open_session<'conn>(
    conn: &'conn Connection,
    profile: &str,
) -> Result<Session<'conn>, CliError> {
    Session::open(conn, profile)
        .map_err(|e| CliError::database(format!("Failed to open profile: {}", e)))
}
