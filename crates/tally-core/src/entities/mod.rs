//! Entity structs for the Tally domain.
//!
//! `Issue` maps to the `issues` table in the libSQL database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` so the wire shape can be
//! validated against a generated schema.

mod issue;

pub use issue::{Issue, ListedIssue, NewIssue};
