//! List query filters built from query-string pairs.

use std::collections::BTreeMap;

use crate::fields::IssueField;

/// The value a single filter criterion must equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
    /// A value no stored document can hold, e.g. `open=maybe`.
    Unsatisfiable,
}

/// Exact-match filter over allow-listed issue fields.
///
/// The implicit `project_name` scope is applied by the store, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    criteria: BTreeMap<IssueField, FilterValue>,
    ignored: Vec<String>,
}

impl IssueFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string pairs.
    ///
    /// Keys outside [`IssueField::FILTERABLE`] are collected in
    /// [`ignored`](Self::ignored). A repeated key keeps its last value.
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(field) = IssueField::from_wire(key) else {
                filter.ignored.push(key.to_string());
                continue;
            };
            let value = value.into();
            let value = if field == IssueField::Open {
                match value.as_str() {
                    "true" => FilterValue::Bool(true),
                    "false" => FilterValue::Bool(false),
                    _ => FilterValue::Unsatisfiable,
                }
            } else {
                FilterValue::Text(value)
            };
            filter.criteria.insert(field, value);
        }
        filter
    }

    /// Require `field` to equal `value` exactly.
    #[must_use]
    pub fn text(mut self, field: IssueField, value: impl Into<String>) -> Self {
        self.criteria.insert(field, FilterValue::Text(value.into()));
        self
    }

    /// Require the `open` flag to equal `open`.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.criteria.insert(IssueField::Open, FilterValue::Bool(open));
        self
    }

    /// Criteria in field order.
    pub fn criteria(&self) -> impl Iterator<Item = (IssueField, &FilterValue)> {
        self.criteria.iter().map(|(field, value)| (*field, value))
    }

    /// Query keys that were dropped because they are not filterable.
    #[must_use]
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
