//! Profile registry: maps profile names to stable identifiers.
//!
//! Profiles are created lazily on first reference and are never updated or
//! deleted. The identifier handed out here is the sole scoping key for
//! every store and query operation.

use rusqlite::{Connection, params};

use crate::operations::StoreError;

/// Opaque, stable identifier for a profile.
///
/// Only this crate can construct one, so collaborators can never forge an
/// identifier; they obtain it from [`get_or_create`] and hand it back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub(crate) i64);

/// Look up a profile by exact name, creating it if absent.
///
/// Idempotent: calling repeatedly with the same name returns the same
/// identifier and creates at most one row. The lookup+insert pair runs in
/// one transaction so a failure cannot leave a half-created profile.
pub fn get_or_create(conn: &Connection, name: &str) -> Result<ProfileId, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyProfileName);
    }

    let tx = conn.unchecked_transaction()?;
    let existing = tx.query_row(
        "SELECT id FROM users WHERE username = ?1",
        params![name],
        |row| row.get::<_, i64>(0),
    );
    let id = match existing {
        Ok(id) => id,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            tx.execute("INSERT INTO users (username) VALUES (?1)", params![name])?;
            tx.last_insert_rowid()
        }
        Err(e) => return Err(e.into()),
    };
    tx.commit()?;

    Ok(ProfileId(id))
}

/// List all known profile names, alphabetically.
pub fn list_profiles(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT username FROM users ORDER BY username")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
