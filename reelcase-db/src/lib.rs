//! SQLite persistence layer for movie profiles.
//!
//! Provides schema creation, the profile registry, CRUD operations, and
//! query APIs backed by SQLite (via rusqlite with bundled feature). All
//! operations are scoped to a [`ProfileId`]; records owned by different
//! profiles are never visible to each other.
//!
//! This crate never logs; every failure surfaces as a typed error and the
//! caller decides presentation.

pub mod operations;
pub mod profiles;
pub mod queries;
pub mod schema;
pub mod session;

pub use rusqlite::Connection;

pub use operations::{StoreError, add_movie, delete_movie, update_rating};
pub use profiles::{ProfileId, get_or_create, list_profiles};
pub use queries::{list_movies, movies_by_rating, profile_stats, random_movie, search_movies};
pub use schema::{SchemaError, open_database, open_memory};
pub use session::Session;
