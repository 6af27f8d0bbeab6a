//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use gigatlas_core::error::{DomainError, RepoError};
use gigatlas_shared::ErrorResponse;
use std::fmt;

use crate::observability::RequestId;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attach the ID of the request that failed.
    pub fn for_request(self, request_id: RequestId) -> RequestError {
        RequestError {
            error: self,
            request_id,
        }
    }

    fn problem(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        }
    }
}

/// An [`AppError`] tagged with its request ID; this is what handlers return.
#[derive(Debug)]
pub struct RequestError {
    pub error: AppError,
    pub request_id: RequestId,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (request {})", self.error, self.request_id.as_str())
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let problem = self
            .error
            .problem()
            .with_request_id(self.request_id.as_str());

        HttpResponse::build(self.status_code()).json(problem)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, key } => {
                AppError::NotFound(format!("{} '{}' not found", entity_type, key))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
            }
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint error: {}", msg);
            }
            RepoError::Integrity(msg) => {
                tracing::error!("Data integrity violation: {}", msg);
            }
        }
        AppError::Internal("Database error".to_string())
    }
}

/// Result type alias for handler internals.
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for handlers.
pub type HandlerResult<T> = Result<T, RequestError>;
