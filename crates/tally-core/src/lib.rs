//! # tally-core
//!
//! Core types shared across all Tally crates:
//! - The `Issue` entity and its list/create projections
//! - Issue ID prefix, generation shape, and parsing
//! - The filterable/updatable field allow-list
//! - Request body interpretation (truthiness rules)
//! - JSON reply bodies returned by the issue endpoints
//! - Cross-cutting error types

pub mod body;
pub mod entities;
pub mod errors;
pub mod fields;
pub mod filter;
pub mod ids;
pub mod responses;
