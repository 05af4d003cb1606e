//! API error type shared by all HTTP modules.
//!
//! Converts application-layer errors to HTTP responses via their error
//! codes, so every endpoint maps not-found, validation, and
//! infrastructure failures the same way.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::capacity::CapacityError;
use crate::domain::foundation::ErrorCode;
use crate::domain::team::TeamError;

/// Error response body for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error carrying a domain error code and message.
#[derive(Debug)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::TeamNotFound
            | ErrorCode::MemberNotFound
            | ErrorCode::IterationNotFound
            | ErrorCode::WeekNotFound
            | ErrorCode::AvailabilityNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidDateRange => StatusCode::BAD_REQUEST,
            ErrorCode::DuplicateMember => StatusCode::CONFLICT,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TeamError> for ApiError {
    fn from(err: TeamError) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
        }
    }
}

impl From<CapacityError> for ApiError {
    fn from(err: CapacityError) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %self.code, message = %self.message, "request failed");
        }
        let body = ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}
