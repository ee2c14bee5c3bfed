//! Directory error types with HTTP status code mapping.
//!
//! [`DirectoryError`] is the central error type. Each variant maps to a
//! specific HTTP status code and structured JSON error response, except
//! [`DirectoryError::WriteFailed`], which answers with the failure notice
//! the user should see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ArtistId, Notice, VenueId};

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "venue not found: 6f1c...",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body returned when a write is rolled back.
#[derive(Debug, Serialize, ToSchema)]
pub struct WriteFailedResponse {
    /// Failure notice naming the entity and the attempted action.
    pub notice: Notice,
    /// Numeric error code.
    pub code: u32,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Venue with the given ID does not exist.
    #[error("venue not found: {0}")]
    VenueNotFound(VenueId),

    /// Artist with the given ID does not exist.
    #[error("artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// No route matches the request path.
    #[error("not found: {0}")]
    RouteNotFound(String),

    /// Request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// A write was rolled back; carries the notice for the user.
    #[error("{}", notice.message)]
    WriteFailed {
        /// Failure notice naming the entity and the attempted action.
        notice: Notice,
    },

}

impl DirectoryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::RouteNotFound(_) => 2000,
            Self::VenueNotFound(_) => 2001,
            Self::ArtistNotFound(_) => 2002,
            Self::PersistenceError(_) => 3001,
            Self::WriteFailed { .. } => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound(_) | Self::VenueNotFound(_) | Self::ArtistNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::PersistenceError(_) | Self::WriteFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let mut response = match self {
            Self::WriteFailed { notice } => {
                axum::Json(WriteFailedResponse { notice, code }).into_response()
            }
            other => axum::Json(ErrorResponse {
                error: ErrorBody {
                    code,
                    message: other.to_string(),
                    details: None,
                },
            })
            .into_response(),
        };
        *response.status_mut() = status;
        response
    }
}
