//! The issue field allow-list.
//!
//! Only fields named here can be filtered on by list queries or written by
//! updates. Store-internal columns never reach a query through user input.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A client-addressable issue field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum IssueField {
    #[serde(rename = "_id")]
    Id,
    #[serde(rename = "issue_title")]
    IssueTitle,
    #[serde(rename = "issue_text")]
    IssueText,
    #[serde(rename = "created_by")]
    CreatedBy,
    #[serde(rename = "assigned_to")]
    AssignedTo,
    #[serde(rename = "status_text")]
    StatusText,
    #[serde(rename = "open")]
    Open,
}

impl IssueField {
    /// Text fields an update may replace.
    pub const UPDATABLE_TEXT: [Self; 5] = [
        Self::IssueTitle,
        Self::IssueText,
        Self::CreatedBy,
        Self::AssignedTo,
        Self::StatusText,
    ];

    /// Fields a list query may filter on.
    pub const FILTERABLE: [Self; 7] = [
        Self::Id,
        Self::IssueTitle,
        Self::IssueText,
        Self::CreatedBy,
        Self::AssignedTo,
        Self::StatusText,
        Self::Open,
    ];

    /// Name used in request and response bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::IssueTitle => "issue_title",
            Self::IssueText => "issue_text",
            Self::CreatedBy => "created_by",
            Self::AssignedTo => "assigned_to",
            Self::StatusText => "status_text",
            Self::Open => "open",
        }
    }

    /// Column name in the `issues` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            other => other.as_str(),
        }
    }

    /// Look up a field by its wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::FILTERABLE
            .into_iter()
            .find(|field| field.as_str() == name)
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip() {
        for field in IssueField::FILTERABLE {
            assert_eq!(IssueField::from_wire(field.as_str()), Some(field));
        }
    }

    #[test]
    fn internal_names_are_not_addressable() {
        assert_eq!(IssueField::from_wire("id"), None);
        assert_eq!(IssueField::from_wire("project_name"), None);
        assert_eq!(IssueField::from_wire("created_on"), None);
        assert_eq!(IssueField::from_wire("rowid"), None);
    }

    #[test]
    fn id_maps_to_store_column() {
        assert_eq!(IssueField::Id.column(), "id");
        assert_eq!(IssueField::StatusText.column(), "status_text");
    }
}
