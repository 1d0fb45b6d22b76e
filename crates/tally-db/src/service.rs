//! Service layer over the issue collection.
//!
//! `TallyService` wraps `TallyDb`. Repo methods are implemented as
//! `impl TallyService` in [`crate::repos`], and the service is what the HTTP
//! handler receives as its [`crate::store::IssueStore`].

use crate::TallyDb;
use crate::error::DatabaseError;

pub struct TallyService {
    db: TallyDb,
}

impl TallyService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TallyDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TallyDb {
        &self.db
    }
}
