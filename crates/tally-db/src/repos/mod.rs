//! Repository methods on [`crate::service::TallyService`].

pub mod issue;
