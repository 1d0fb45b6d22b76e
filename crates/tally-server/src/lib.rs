//! # tally-server
//!
//! HTTP surface for Tally: project-scoped issue CRUD at
//! `/api/issues/{project}` plus a `/health` probe.
//!
//! The issue store is injected as a generic [`tally_db::store::IssueStore`],
//! so the router can be driven in tests with an in-memory or failing store.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ServerError;
pub use router::app;
pub use server::Server;
