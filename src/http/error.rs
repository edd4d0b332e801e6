//! HTTP error handling and response types.
//!
//! Every failure surfaces as a JSON object with an `error` key and the
//! matching status code. The four client-visible cases are terminal; nothing
//! is retried or recovered internally.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// JSON body for every error response: `{"error": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Create request missing `title` or `content` (400).
    MissingField,
    /// Search request with neither `title` nor `content` (400).
    MissingQuery,
    /// Update request that matched a post but carried no fields (400).
    NoChange,
    /// No post with this id (404).
    NotFound(i64),
    /// Storage failure that is none of the above (500).
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::MissingQuery | Self::NoChange => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingField => "Please fill out required fields".to_string(),
            Self::MissingQuery => "Please provide title or content query".to_string(),
            Self::NoChange => "Bad request: Nothing was changed".to_string(),
            Self::NotFound(id) => format!("Post with id ({id}) does not exist."),
            Self::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            RepositoryError::NoChange => Self::NoChange,
            RepositoryError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_keep_their_status() {
        let err = AppError::from(RepositoryError::NotFound(7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Post with id (7) does not exist.");

        let err = AppError::from(RepositoryError::NoChange);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(AppError::MissingField.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingQuery.status(), StatusCode::BAD_REQUEST);
    }
}
