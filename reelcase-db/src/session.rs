//! Profile-bound façade over the store.
//!
//! A [`Session`] pre-binds a resolved [`ProfileId`] to the store handle, so
//! collaborators (the CLI, the website exporter) never pass identifiers
//! around themselves. Switching profiles means opening a new session; the
//! old one simply goes out of use.

use std::collections::BTreeMap;

use reelcase_catalog::{MovieEntry, MovieStats, NewMovie, RatedTitle};
use rusqlite::Connection;

use crate::operations::{self, StoreError};
use crate::profiles::{self, ProfileId};
use crate::queries;

/// One profile's view of the store.
pub struct Session<'conn> {
    conn: &'conn Connection,
    profile: ProfileId,
}

impl<'conn> Session<'conn> {
    /// Open a session for the named profile, creating the profile on first
    /// use.
    pub fn open(conn: &'conn Connection, profile_name: &str) -> Result<Self, StoreError> {
        let profile = profiles::get_or_create(conn, profile_name)?;
        Ok(Self { conn, profile })
    }

    /// Bind an already-resolved profile identifier.
    pub fn with_profile(conn: &'conn Connection, profile: ProfileId) -> Self {
        Self { conn, profile }
    }

    /// The identifier this session is bound to.
    pub fn profile(&self) -> ProfileId {
        self.profile
    }

    pub fn add(&self, movie: &NewMovie) -> Result<(), StoreError> {
        operations::add_movie(self.conn, self.profile, movie)
    }

    pub fn delete(&self, title: &str) -> Result<usize, StoreError> {
        operations::delete_movie(self.conn, self.profile, title)
    }

    pub fn update_rating(&self, title: &str, rating: f64) -> Result<usize, StoreError> {
        operations::update_rating(self.conn, self.profile, title, rating)
    }

    pub fn list(&self) -> Result<BTreeMap<String, MovieEntry>, StoreError> {
        queries::list_movies(self.conn, self.profile)
    }

    pub fn search(&self, term: &str) -> Result<Vec<RatedTitle>, StoreError> {
        queries::search_movies(self.conn, self.profile, term)
    }

    pub fn by_rating(&self) -> Result<Vec<RatedTitle>, StoreError> {
        queries::movies_by_rating(self.conn, self.profile)
    }

    pub fn stats(&self) -> Result<MovieStats, StoreError> {
        queries::profile_stats(self.conn, self.profile)
    }

    pub fn random(&self) -> Result<Option<(String, MovieEntry)>, StoreError> {
        queries::random_movie(self.conn, self.profile)
    }
}
