//! Read queries over a profile's movie records.
//!
//! Provides the full listing, substring search, rating ranking, aggregate
//! statistics, and a random pick. Every query filters on the owning
//! profile; records of other profiles are never visible.

use std::collections::BTreeMap;

use reelcase_catalog::{MovieEntry, MovieStats, RatedTitle};
use rusqlite::{Connection, params};

use crate::operations::StoreError;
use crate::profiles::ProfileId;

/// Full snapshot of a profile's collection, keyed by title.
///
/// Keys are unique by construction (per-profile title uniqueness).
pub fn list_movies(
    conn: &Connection,
    profile: ProfileId,
) -> Result<BTreeMap<String, MovieEntry>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT title, year, rating, poster_url
         FROM movies WHERE user_id = ?1",
    )?;
    let rows = stmt.query_map(params![profile.0], |row| {
        Ok((
            row.get::<_, String>(0)?,
            MovieEntry {
                year: row.get(1)?,
                rating: row.get(2)?,
                poster_url: row.get(3)?,
            },
        ))
    })?;
    rows.collect::<Result<BTreeMap<_, _>, _>>().map_err(Into::into)
}

/// Search a profile's titles by substring containment (case-insensitive
/// LIKE). An empty result is a valid outcome, not an error.
pub fn search_movies(
    conn: &Connection,
    profile: ProfileId,
    term: &str,
) -> Result<Vec<RatedTitle>, StoreError> {
    let pattern = format!("%{}%", term);
    let mut stmt = conn.prepare(
        "SELECT title, rating FROM movies
         WHERE user_id = ?1 AND title LIKE ?2 ORDER BY title",
    )?;
    let rows = stmt.query_map(params![profile.0, pattern], row_to_rated_title)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// A profile's movies ordered by rating, highest first.
///
/// Ties are broken by title ascending so the ranking is reproducible.
pub fn movies_by_rating(
    conn: &Connection,
    profile: ProfileId,
) -> Result<Vec<RatedTitle>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT title, rating FROM movies
         WHERE user_id = ?1 ORDER BY rating DESC, title",
    )?;
    let rows = stmt.query_map(params![profile.0], row_to_rated_title)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Aggregate rating statistics over all of a profile's records.
///
/// `best` and `worst` contain every title tied at the maximum and minimum
/// rating. Fails with [`StoreError::EmptyCollection`] when the profile owns
/// zero records, so the mean and median are never computed over nothing.
pub fn profile_stats(conn: &Connection, profile: ProfileId) -> Result<MovieStats, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT title, rating FROM movies
         WHERE user_id = ?1 ORDER BY title",
    )?;
    let rows = stmt.query_map(params![profile.0], row_to_rated_title)?;
    let movies = rows.collect::<Result<Vec<_>, _>>()?;

    if movies.is_empty() {
        return Err(StoreError::EmptyCollection);
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };

    let max = ratings[ratings.len() - 1];
    let min = ratings[0];
    let best = movies.iter().filter(|m| m.rating == max).cloned().collect();
    let worst = movies.iter().filter(|m| m.rating == min).cloned().collect();

    Ok(MovieStats {
        mean,
        median,
        best,
        worst,
    })
}

/// Pick one of a profile's movies at random, or `None` if it has none.
pub fn random_movie(
    conn: &Connection,
    profile: ProfileId,
) -> Result<Option<(String, MovieEntry)>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT title, year, rating, poster_url
         FROM movies WHERE user_id = ?1 ORDER BY RANDOM() LIMIT 1",
    )?;
    let result = stmt.query_row(params![profile.0], |row| {
        Ok((
            row.get::<_, String>(0)?,
            MovieEntry {
                year: row.get(1)?,
                rating: row.get(2)?,
                poster_url: row.get(3)?,
            },
        ))
    });
    match result {
        Ok(pick) => Ok(Some(pick)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_rated_title(row: &rusqlite::Row<'_>) -> rusqlite::Result<RatedTitle> {
    Ok(RatedTitle {
        title: row.get(0)?,
        rating: row.get(1)?,
    })
}
