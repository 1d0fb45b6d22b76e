//! Interpretation of issue request bodies.
//!
//! Bodies arrive as JSON objects or urlencoded forms and are held as a JSON
//! map. A value counts as *present* only when it is truthy: a non-empty
//! string, a non-zero number, or `true`. Everything else (`null`, `false`,
//! `0`, `""`, arrays, objects) is treated as if the key were absent.

use serde_json::{Map, Value};

use crate::entities::NewIssue;
use crate::fields::IssueField;

/// A parsed request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    #[must_use]
    pub const fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a body from urlencoded pairs. Every value is a string.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    /// Rendered value of `key` if it is truthy.
    #[must_use]
    pub fn truthy(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// The `_id` the caller addressed, if any.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.truthy(IssueField::Id.as_str())
    }

    /// Validate creation input. `None` when a required field is missing.
    #[must_use]
    pub fn new_issue(&self) -> Option<NewIssue> {
        let issue_title = self.truthy(IssueField::IssueTitle.as_str())?;
        let issue_text = self.truthy(IssueField::IssueText.as_str())?;
        let created_by = self.truthy(IssueField::CreatedBy.as_str())?;
        Some(NewIssue {
            issue_title,
            issue_text,
            created_by,
            assigned_to: self
                .truthy(IssueField::AssignedTo.as_str())
                .unwrap_or_default(),
            status_text: self
                .truthy(IssueField::StatusText.as_str())
                .unwrap_or_default(),
        })
    }

    /// Text fields an update should replace, in allow-list order.
    ///
    /// Empty values mean "no change", not "clear".
    #[must_use]
    pub fn text_updates(&self) -> Vec<(IssueField, String)> {
        IssueField::UPDATABLE_TEXT
            .into_iter()
            .filter_map(|field| self.truthy(field.as_str()).map(|value| (field, value)))
            .collect()
    }

    /// Whether the body asks to close the issue.
    ///
    /// Only the literal string `"false"` closes; JSON `false` does not, and
    /// nothing reopens.
    #[must_use]
    pub fn closes_issue(&self) -> bool {
        matches!(self.0.get(IssueField::Open.as_str()), Some(Value::String(s)) if s == "false")
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
