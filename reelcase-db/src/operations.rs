//! Write operations on a profile's movie records.

use reelcase_catalog::NewMovie;
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::profiles::ProfileId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the statement failed.
    /// Fatal to the current operation, not to the process.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    /// A record with this title already exists for the profile.
    #[error("a movie titled '{title}' already exists for this profile")]
    DuplicateTitle { title: String },

    /// Statistics requested on a profile that owns zero records.
    #[error("the profile has no movies")]
    EmptyCollection,

    /// Profile names must be non-empty.
    #[error("profile name must not be empty")]
    EmptyProfileName,

    /// Movie titles must be non-empty.
    #[error("movie title must not be empty")]
    EmptyTitle,
}

/// Insert a new movie into a profile's collection.
///
/// Title uniqueness is enforced by the `(user_id, title)` unique index, so
/// a concurrent writer cannot slip a duplicate past a pre-check; the
/// constraint violation is reported as [`StoreError::DuplicateTitle`].
pub fn add_movie(
    conn: &Connection,
    profile: ProfileId,
    movie: &NewMovie,
) -> Result<(), StoreError> {
    if movie.title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }

    let result = conn.execute(
        "INSERT INTO movies (user_id, title, year, rating, poster_url)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            profile.0,
            movie.title,
            movie.year,
            movie.rating,
            movie.poster_url,
        ],
    );
    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Err(StoreError::DuplicateTitle {
                title: movie.title.clone(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a movie by title. Returns the number of rows removed (0 or 1).
///
/// A missing title is a normal outcome, not an error; callers decide
/// whether zero matters.
pub fn delete_movie(
    conn: &Connection,
    profile: ProfileId,
    title: &str,
) -> Result<usize, StoreError> {
    let removed = conn.execute(
        "DELETE FROM movies WHERE user_id = ?1 AND title = ?2",
        params![profile.0, title],
    )?;
    Ok(removed)
}

/// Update a movie's rating by title. Returns the number of rows changed
/// (0 or 1), with the same no-match-is-not-fatal policy as delete.
pub fn update_rating(
    conn: &Connection,
    profile: ProfileId,
    title: &str,
    rating: f64,
) -> Result<usize, StoreError> {
    let changed = conn.execute(
        "UPDATE movies SET rating = ?3, updated_at = datetime('now')
         WHERE user_id = ?1 AND title = ?2",
        params![profile.0, title, rating],
    )?;
    Ok(changed)
}
