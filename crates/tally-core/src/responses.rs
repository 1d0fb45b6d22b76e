//! JSON reply bodies returned by the issue endpoints.
//!
//! Validation outcomes are ordinary replies carrying an `error` field; callers
//! inspect the body, not the status code.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MSG_REQUIRED_FIELDS_MISSING: &str = "required field(s) missing";
pub const MSG_MISSING_ID: &str = "missing _id";
pub const MSG_NO_UPDATE_FIELDS: &str = "no update field(s) sent";
pub const MSG_COULD_NOT_UPDATE: &str = "could not update";
pub const MSG_COULD_NOT_DELETE: &str = "could not delete";
pub const MSG_UPDATED: &str = "successfully updated";
pub const MSG_DELETED: &str = "successfully deleted";

/// Reply body for create failures and update/delete outcomes.
///
/// Variant order matters for deserialization: the untagged match tries the
/// `_id`-carrying shapes first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum IssueReply {
    /// `{"result": ..., "_id": ...}`
    Done {
        result: String,
        #[serde(rename = "_id")]
        id: String,
    },
    /// `{"error": ..., "_id": ...}`
    Failed {
        error: String,
        #[serde(rename = "_id")]
        id: String,
    },
    /// `{"error": ...}`
    Rejected { error: String },
}

impl IssueReply {
    #[must_use]
    pub fn required_fields_missing() -> Self {
        Self::Rejected {
            error: MSG_REQUIRED_FIELDS_MISSING.to_string(),
        }
    }

    #[must_use]
    pub fn missing_id() -> Self {
        Self::Rejected {
            error: MSG_MISSING_ID.to_string(),
        }
    }

    #[must_use]
    pub fn no_update_fields(id: impl Into<String>) -> Self {
        Self::failed(MSG_NO_UPDATE_FIELDS, id)
    }

    #[must_use]
    pub fn could_not_update(id: impl Into<String>) -> Self {
        Self::failed(MSG_COULD_NOT_UPDATE, id)
    }

    #[must_use]
    pub fn could_not_delete(id: impl Into<String>) -> Self {
        Self::failed(MSG_COULD_NOT_DELETE, id)
    }

    #[must_use]
    pub fn updated(id: impl Into<String>) -> Self {
        Self::done(MSG_UPDATED, id)
    }

    #[must_use]
    pub fn deleted(id: impl Into<String>) -> Self {
        Self::done(MSG_DELETED, id)
    }

    fn failed(error: &str, id: impl Into<String>) -> Self {
        Self::Failed {
            error: error.to_string(),
            id: id.into(),
        }
    }

    fn done(result: &str, id: impl Into<String>) -> Self {
        Self::Done {
            result: result.to_string(),
            id: id.into(),
        }
    }
}
