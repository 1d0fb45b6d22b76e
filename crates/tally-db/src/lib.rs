//! # tally-db
//!
//! libSQL-backed issue store for Tally.
//!
//! Holds the `issues` collection and exposes it through [`store::IssueStore`],
//! the seam the HTTP handler is written against. Every operation is a single
//! statement scoped by `project_name`, so per-document atomicity comes from
//! `SQLite` itself.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;
mod test_support;
pub mod updates;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the issue collection.
///
/// Wraps a libSQL database and a single shared connection.
pub struct TallyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TallyDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let tally_db = Self { db, conn };
        tally_db.run_migrations().await?;
        tracing::debug!(path, "opened issue store");
        Ok(tally_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL, e.g. `"iss-a3f8b2c1d4e5f607"`.
    ///
    /// Uses `randomblob` in SQL to produce the hex suffix, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let bytes = tally_core::ids::ID_RANDOM_BYTES;
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob({bytes})))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
