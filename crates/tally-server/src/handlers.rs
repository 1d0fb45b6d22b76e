//! Issue endpoint handlers.
//!
//! Validation outcomes are `200 OK` bodies with an `error` field. Store
//! failures surface as `500` on list/create, and are folded into
//! `could not update` / `could not delete` on update/delete.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tally_core::body::RequestBody;
use tally_core::entities::ListedIssue;
use tally_core::filter::IssueFilter;
use tally_core::ids::IssueId;
use tally_core::responses::IssueReply;
use tally_db::error::DatabaseError;
use tally_db::store::IssueStore;
use tally_db::updates::issue::{IssueUpdate, IssueUpdateBuilder};

use crate::extract::IssueBody;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

fn store_failure(project: &str, op: &'static str, error: &DatabaseError) -> Response {
    tracing::error!(project, op, %error, "issue store failed");
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
}

/// `GET /api/issues/{project}`
pub async fn list_issues<S: IssueStore>(
    State(store): State<Arc<S>>,
    Path(project): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let filter = IssueFilter::from_query(pairs);
    if !filter.ignored().is_empty() {
        tracing::debug!(project, ignored = ?filter.ignored(), "ignoring non-filterable query keys");
    }

    match store.list_issues(&project, &filter).await {
        Ok(issues) => {
            let listed: Vec<ListedIssue> = issues.into_iter().map(ListedIssue::from).collect();
            Json(listed).into_response()
        }
        Err(error) => store_failure(&project, "list", &error),
    }
}

/// `POST /api/issues/{project}`
pub async fn create_issue<S: IssueStore>(
    State(store): State<Arc<S>>,
    Path(project): Path<String>,
    IssueBody(body): IssueBody,
) -> Response {
    let Some(new) = body.new_issue() else {
        return Json(IssueReply::required_fields_missing()).into_response();
    };

    match store.create_issue(&project, &new).await {
        Ok(issue) => {
            tracing::info!(project, id = %issue.id, "created issue");
            Json(issue).into_response()
        }
        Err(error) => store_failure(&project, "create", &error),
    }
}

fn update_from_body(body: &RequestBody) -> IssueUpdate {
    let builder = body
        .text_updates()
        .into_iter()
        .fold(IssueUpdateBuilder::new(), |builder, (field, value)| {
            builder.text(field, value)
        });
    if body.closes_issue() {
        builder.close().build()
    } else {
        builder.build()
    }
}

/// `PUT /api/issues/{project}`
pub async fn update_issue<S: IssueStore>(
    State(store): State<Arc<S>>,
    Path(project): Path<String>,
    IssueBody(body): IssueBody,
) -> Json<IssueReply> {
    let Some(raw_id) = body.id() else {
        return Json(IssueReply::missing_id());
    };

    let update = update_from_body(&body);
    if update.is_empty() {
        return Json(IssueReply::no_update_fields(raw_id));
    }

    let id = match IssueId::parse(&raw_id) {
        Ok(id) => id,
        Err(error) => {
            tracing::debug!(project, %error, "update rejected");
            return Json(IssueReply::could_not_update(raw_id));
        }
    };

    match store.update_issue(&project, &id, &update).await {
        Ok(0) => {
            tracing::debug!(project, %id, "update matched no issue");
            Json(IssueReply::could_not_update(raw_id))
        }
        Ok(_) => {
            tracing::info!(project, %id, ?update, "updated issue");
            Json(IssueReply::updated(raw_id))
        }
        Err(error) => {
            tracing::warn!(project, %id, %error, "update failed in store");
            Json(IssueReply::could_not_update(raw_id))
        }
    }
}

/// `DELETE /api/issues/{project}`
pub async fn delete_issue<S: IssueStore>(
    State(store): State<Arc<S>>,
    Path(project): Path<String>,
    IssueBody(body): IssueBody,
) -> Json<IssueReply> {
    let Some(raw_id) = body.id() else {
        return Json(IssueReply::missing_id());
    };

    let id = match IssueId::parse(&raw_id) {
        Ok(id) => id,
        Err(error) => {
            tracing::debug!(project, %error, "delete rejected");
            return Json(IssueReply::could_not_delete(raw_id));
        }
    };

    match store.delete_issue(&project, &id).await {
        Ok(0) => {
            tracing::debug!(project, %id, "delete matched no issue");
            Json(IssueReply::could_not_delete(raw_id))
        }
        Ok(_) => {
            tracing::info!(project, %id, "deleted issue");
            Json(IssueReply::deleted(raw_id))
        }
        Err(error) => {
            tracing::warn!(project, %id, %error, "delete failed in store");
            Json(IssueReply::could_not_delete(raw_id))
        }
    }
}
