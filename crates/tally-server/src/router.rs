//! Route table.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tally_db::store::IssueStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_issue, delete_issue, health, list_issues, update_issue};

/// Build the application router over `store`.
pub fn app<S: IssueStore>(store: Arc<S>, cors: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route(
            "/api/issues/{project}",
            get(list_issues::<S>)
                .post(create_issue::<S>)
                .put(update_issue::<S>)
                .delete(delete_issue::<S>),
        )
        .with_state(store)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
