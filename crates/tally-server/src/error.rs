//! Server error types.

use thiserror::Error;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid listener configuration.
    #[error(transparent)]
    Config(#[from] tally_config::ConfigError),

    /// The issue store could not be opened.
    #[error(transparent)]
    Database(#[from] tally_db::error::DatabaseError),

    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
