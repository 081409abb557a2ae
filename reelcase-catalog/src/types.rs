//! Value types for the movie collection model.

use serde::{Deserialize, Serialize};

/// A movie to be inserted into a profile's collection.
///
/// The rating is expected to be on the 0.0–10.0 scale, but the range is a
/// caller concern; the store persists whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// Poster image URL; `None` when the source had nothing usable.
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Stored details of one movie, keyed by title in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// A title/rating pair, as returned by search and ranking queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedTitle {
    pub title: String,
    pub rating: f64,
}

/// Aggregate rating statistics over one profile's collection.
///
/// `best` and `worst` hold *every* title tied at the maximum and minimum
/// rating, not a single winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStats {
    pub mean: f64,
    pub median: f64,
    pub best: Vec<RatedTitle>,
    pub worst: Vec<RatedTitle>,
}
