//! Issue repository. Every statement is scoped by project.

use chrono::Utc;

use tally_core::entities::{Issue, NewIssue};
use tally_core::filter::{FilterValue, IssueFilter};
use tally_core::ids::{IssueId, PREFIX_ISSUE};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_flag};
use crate::service::TallyService;
use crate::updates::issue::IssueUpdate;

const SELECT_COLS: &str = "id, project_name, issue_title, issue_text, created_by, assigned_to, \
     status_text, open, created_on, updated_on";

fn row_to_issue(row: &libsql::Row) -> Result<Issue, DatabaseError> {
    Ok(Issue {
        id: row.get(0)?,
        project_name: row.get(1)?,
        issue_title: row.get(2)?,
        issue_text: row.get(3)?,
        created_by: row.get(4)?,
        assigned_to: row.get(5)?,
        status_text: row.get(6)?,
        open: parse_flag(row.get::<i64>(7)?)?,
        created_on: parse_datetime(&row.get::<String>(8)?)?,
        updated_on: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl TallyService {
    /// Insert a new open issue and return the stored record.
    pub async fn create_issue(
        &self,
        project: &str,
        new: &NewIssue,
    ) -> Result<Issue, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ISSUE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO issues (id, project_name, issue_title, issue_text, created_by, assigned_to, status_text, open, created_on, updated_on)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    project,
                    new.issue_title.as_str(),
                    new.issue_text.as_str(),
                    new.created_by.as_str(),
                    new.assigned_to.as_str(),
                    new.status_text.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Issue {
            id,
            project_name: project.to_string(),
            issue_title: new.issue_title.clone(),
            issue_text: new.issue_text.clone(),
            created_by: new.created_by.clone(),
            assigned_to: new.assigned_to.clone(),
            status_text: new.status_text.clone(),
            open: true,
            created_on: now,
            updated_on: now,
        })
    }

    /// All issues in `project` matching every criterion, in insertion order.
    pub async fn list_issues(
        &self,
        project: &str,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, DatabaseError> {
        let mut clauses = vec!["project_name = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![project.into()];
        let mut idx = 2usize;

        for (field, value) in filter.criteria() {
            match value {
                FilterValue::Text(text) => {
                    clauses.push(format!("{} = ?{idx}", field.column()));
                    params.push(text.clone().into());
                    idx += 1;
                }
                FilterValue::Bool(flag) => {
                    clauses.push(format!("{} = ?{idx}", field.column()));
                    params.push(i64::from(*flag).into());
                    idx += 1;
                }
                FilterValue::Unsatisfiable => clauses.push("0".to_string()),
            }
        }

        let sql = format!(
            "SELECT {SELECT_COLS} FROM issues WHERE {} ORDER BY rowid",
            clauses.join(" AND ")
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut issues = Vec::new();
        while let Some(row) = rows.next().await? {
            issues.push(row_to_issue(&row)?);
        }
        Ok(issues)
    }

    /// Apply `update` to the issue `(project, id)` and stamp `updated_on`.
    ///
    /// Returns the number of issues modified: 0 or 1. An empty update touches
    /// nothing and returns 0.
    pub async fn update_issue(
        &self,
        project: &str,
        id: &IssueId,
        update: &IssueUpdate,
    ) -> Result<u64, DatabaseError> {
        if update.is_empty() {
            return Ok(0);
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        for (field, value) in update.text_sets() {
            sets.push(format!("{} = ?{idx}", field.column()));
            params.push(value.into());
            idx += 1;
        }
        if update.close {
            sets.push("open = 0".to_string());
        }

        sets.push(format!("updated_on = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.as_str().into());
        params.push(project.into());
        let sql = format!(
            "UPDATE issues SET {} WHERE id = ?{} AND project_name = ?{}",
            sets.join(", "),
            idx,
            idx + 1
        );

        let modified = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(modified)
    }

    /// Delete the issue `(project, id)`. Returns the number deleted: 0 or 1.
    pub async fn delete_issue(&self, project: &str, id: &IssueId) -> Result<u64, DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM issues WHERE id = ?1 AND project_name = ?2",
                [id.as_str(), project],
            )
            .await?;
        Ok(deleted)
    }
}
