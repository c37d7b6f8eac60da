//! Common error types and handling for Chatline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Chatline application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database not available")]
    ServiceUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] bson::ser::Error),

    #[error("Document decoding error: {0}")]
    Decoding(#[from] bson::de::Error),

    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::ServiceUnavailable
            | Error::Database(_)
            | Error::Encoding(_)
            | Error::Decoding(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Encoding(_) | Error::Decoding(_) => "SERIALIZATION_ERROR",
            Error::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, code = error_code, "Internal server error");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
