//! Cross-cutting error types for Tally.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The server binary converges everything with
//! `anyhow`.

use thiserror::Error;

/// Errors raised by domain-level parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string could not be parsed as a store identifier.
    #[error("Malformed issue id: {0:?}")]
    MalformedId(String),
}
