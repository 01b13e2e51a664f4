//! Plain-text error responses
//!
//! Clients of the books API match on literal response text. A missing field
//! or an unknown book is answered with `200 OK` and a descriptive body; only
//! store failures produce a server error status, and their cause is logged
//! rather than returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::DomainError;

pub const NO_BOOK_EXISTS: &str = "no book exists";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// API error rendered as a plain-text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Required field absent, answered with 200
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }

    /// Unknown or malformed book id, answered with 200
    pub fn no_book() -> Self {
        Self::new(StatusCode::OK, NO_BOOK_EXISTS)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::missing_field(message),
            DomainError::NotFound { .. } => Self::no_book(),
            other => {
                error!(error = %other, "Book store operation failed");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
