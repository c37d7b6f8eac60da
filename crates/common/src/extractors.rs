//! Custom axum extractors for Chatline

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Default number of records returned by limited list endpoints
pub const DEFAULT_LIMIT: i64 = 50;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// `?limit=` query parameter. Defaults to 50; there is no upper bound.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: i64,
}

impl Default for LimitQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// JSON extractor that validates the deserialized value automatically.
///
/// Requires `T: DeserializeOwned + Validate`. Malformed bodies and schema
/// violations are both reported as 422 so that every check on the body runs
/// before a handler touches the store.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::Validation(e.into()))?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string counterpart of [`ValidatedJson`]; failures are 422 as well.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// Rejection type for `ValidatedQuery`
#[derive(Debug)]
pub enum ValidatedQueryRejection {
    Query(QueryRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedQueryRejection::Query(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedQueryRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::Query)?;
        value
            .validate()
            .map_err(|e| ValidatedQueryRejection::Validation(e.into()))?;
        Ok(ValidatedQuery(value))
    }
}
