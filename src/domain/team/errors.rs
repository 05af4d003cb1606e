//! Team-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TeamId, TeamMemberId};

/// Team-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// Team was not found.
    NotFound(TeamId),
    /// Member was not found.
    MemberNotFound(TeamMemberId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl TeamError {
    pub fn not_found(id: TeamId) -> Self {
        TeamError::NotFound(id)
    }

    pub fn member_not_found(id: TeamMemberId) -> Self {
        TeamError::MemberNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TeamError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TeamError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TeamError::NotFound(_) => ErrorCode::TeamNotFound,
            TeamError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            TeamError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TeamError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TeamError::NotFound(id) => format!("Team not found: {}", id),
            TeamError::MemberNotFound(id) => format!("Team member not found: {}", id),
            TeamError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TeamError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TeamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TeamError {}

impl From<DomainError> for TeamError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange => {
                TeamError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => TeamError::Infrastructure(err.to_string()),
        }
    }
}
