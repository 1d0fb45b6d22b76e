//! The store seam the HTTP handler is written against.
//!
//! Handlers receive an `Arc<S: IssueStore>` at router construction, so tests
//! can swap in a failing or recording store without touching the network.

use std::future::Future;

use tally_core::entities::{Issue, NewIssue};
use tally_core::filter::IssueFilter;
use tally_core::ids::IssueId;

use crate::error::DatabaseError;
use crate::service::TallyService;
use crate::updates::issue::IssueUpdate;

/// Single-document operations over a project-scoped issue collection.
pub trait IssueStore: Send + Sync + 'static {
    /// Issues in `project` matching `filter`.
    fn list_issues(
        &self,
        project: &str,
        filter: &IssueFilter,
    ) -> impl Future<Output = Result<Vec<Issue>, DatabaseError>> + Send;

    /// Persist a new open issue and return the stored record.
    fn create_issue(
        &self,
        project: &str,
        new: &NewIssue,
    ) -> impl Future<Output = Result<Issue, DatabaseError>> + Send;

    /// Apply `update` to `(project, id)`. Resolves to the number modified.
    fn update_issue(
        &self,
        project: &str,
        id: &IssueId,
        update: &IssueUpdate,
    ) -> impl Future<Output = Result<u64, DatabaseError>> + Send;

    /// Delete `(project, id)`. Resolves to the number deleted.
    fn delete_issue(
        &self,
        project: &str,
        id: &IssueId,
    ) -> impl Future<Output = Result<u64, DatabaseError>> + Send;
}

impl IssueStore for TallyService {
    async fn list_issues(
        &self,
        project: &str,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, DatabaseError> {
        Self::list_issues(self, project, filter).await
    }

    async fn create_issue(&self, project: &str, new: &NewIssue) -> Result<Issue, DatabaseError> {
        Self::create_issue(self, project, new).await
    }

    async fn update_issue(
        &self,
        project: &str,
        id: &IssueId,
        update: &IssueUpdate,
    ) -> Result<u64, DatabaseError> {
        Self::update_issue(self, project, id, update).await
    }

    async fn delete_issue(&self, project: &str, id: &IssueId) -> Result<u64, DatabaseError> {
        Self::delete_issue(self, project, id).await
    }
}
