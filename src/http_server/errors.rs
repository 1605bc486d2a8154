//! # HTTP Errors
//!
//! Maps core errors onto status codes with a `{"detail": ...}` body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::ValidationError;
use crate::observability::{Event, Logger};
use crate::registry::RegistryError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Inbound value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body missing, malformed, of the wrong shape or content type
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Document not found")]
    DocumentNotFound,

    /// Storage failure, fatal for the request
    #[error("{0}")]
    Registry(#[from] RegistryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::DocumentNotFound => StatusCode::NOT_FOUND,
            ApiError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ApiError::Registry(err) => {
                Logger::event(
                    Event::RequestFailed,
                    &[("code", err.code()), ("reason", err.to_string().as_str())],
                );
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::new("max_results", "too big")).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::DocumentNotFound.status_code(), StatusCode::NOT_FOUND);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = ApiError::from(RegistryError::Io {
            path: "documents.json".into(),
            source: io,
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_detail() {
        assert_eq!(ApiError::DocumentNotFound.to_string(), "Document not found");
    }
}
