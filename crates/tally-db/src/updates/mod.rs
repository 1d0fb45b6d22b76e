//! Partial-update builders.

pub mod issue;
