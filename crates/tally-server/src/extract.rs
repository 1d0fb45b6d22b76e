//! Request body extractor for the issue endpoints.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{Map, Value};
use tally_core::body::RequestBody;

/// A JSON-object or urlencoded body, whichever the content type declares.
///
/// Any other content type, or none, yields an empty body rather than a
/// rejection, so a bare `PUT`/`DELETE` reaches the handler and reports
/// `missing _id`.
#[derive(Debug, Clone, Default)]
pub struct IssueBody(pub RequestBody);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Ignored,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if mime.eq_ignore_ascii_case("application/json") {
        BodyKind::Json
    } else if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Ignored
    }
}

impl<S> FromRequest<S> for IssueBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(map) = Json::<Map<String, Value>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(RequestBody::new(map)))
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(RequestBody::from_pairs(pairs)))
            }
            BodyKind::Ignored => Ok(Self::default()),
        }
    }
}
