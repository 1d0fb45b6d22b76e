use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tracked issue, scoped to a project by name.
///
/// This is the full stored record, echoed back verbatim on creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: String,
    pub project_name: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// An issue as returned by list queries: every field except `project_name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListedIssue {
    #[serde(rename = "_id")]
    pub id: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<Issue> for ListedIssue {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            issue_title: issue.issue_title,
            issue_text: issue.issue_text,
            created_by: issue.created_by,
            assigned_to: issue.assigned_to,
            status_text: issue.status_text,
            open: issue.open,
            created_on: issue.created_on,
            updated_on: issue.updated_on,
        }
    }
}

/// Validated input for creating an issue.
///
/// The three required fields are guaranteed non-empty when built through
/// [`crate::body::RequestBody::new_issue`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewIssue {
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub status_text: String,
}

impl NewIssue {
    /// Build a new issue with empty optional fields.
    #[must_use]
    pub fn new(
        issue_title: impl Into<String>,
        issue_text: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            issue_title: issue_title.into(),
            issue_text: issue_text.into(),
            created_by: created_by.into(),
            assigned_to: String::new(),
            status_text: String::new(),
        }
    }

    #[must_use]
    pub fn assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = assigned_to.into();
        self
    }

    #[must_use]
    pub fn status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }
}
