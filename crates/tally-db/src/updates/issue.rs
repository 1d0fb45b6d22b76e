//! Issue update builder.

use tally_core::fields::IssueField;

/// Fields to replace on one issue. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    /// Set `open = false`. There is no way to reopen.
    pub close: bool,
}

impl IssueUpdate {
    /// Whether applying this update would change nothing but `updated_on`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_sets().is_empty() && !self.close
    }

    /// Text columns to set, in allow-list order.
    #[must_use]
    pub fn text_sets(&self) -> Vec<(IssueField, &str)> {
        [
            (IssueField::IssueTitle, &self.issue_title),
            (IssueField::IssueText, &self.issue_text),
            (IssueField::CreatedBy, &self.created_by),
            (IssueField::AssignedTo, &self.assigned_to),
            (IssueField::StatusText, &self.status_text),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Default)]
pub struct IssueUpdateBuilder(IssueUpdate);

impl IssueUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IssueUpdate::default())
    }

    #[must_use]
    pub fn issue_title(mut self, value: impl Into<String>) -> Self {
        self.0.issue_title = Some(value.into());
        self
    }

    #[must_use]
    pub fn issue_text(mut self, value: impl Into<String>) -> Self {
        self.0.issue_text = Some(value.into());
        self
    }

    #[must_use]
    pub fn created_by(mut self, value: impl Into<String>) -> Self {
        self.0.created_by = Some(value.into());
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, value: impl Into<String>) -> Self {
        self.0.assigned_to = Some(value.into());
        self
    }

    #[must_use]
    pub fn status_text(mut self, value: impl Into<String>) -> Self {
        self.0.status_text = Some(value.into());
        self
    }

    /// Set a text field by its allow-list entry.
    ///
    /// `_id` and `open` are not text columns and are ignored.
    #[must_use]
    pub fn text(self, field: IssueField, value: impl Into<String>) -> Self {
        match field {
            IssueField::IssueTitle => self.issue_title(value),
            IssueField::IssueText => self.issue_text(value),
            IssueField::CreatedBy => self.created_by(value),
            IssueField::AssignedTo => self.assigned_to(value),
            IssueField::StatusText => self.status_text(value),
            IssueField::Id | IssueField::Open => self,
        }
    }

    #[must_use]
    pub const fn close(mut self) -> Self {
        self.0.close = true;
        self
    }

    #[must_use]
    pub fn build(self) -> IssueUpdate {
        self.0
    }
}
