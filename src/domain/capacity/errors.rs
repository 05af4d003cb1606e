//! Capacity-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, IterationId, IterationWeekId, TeamId, TeamMemberId, ValidationError,
};

/// Capacity-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// Team referenced by the operation was not found.
    TeamNotFound(TeamId),
    /// Iteration was not found.
    IterationNotFound(IterationId),
    /// Iteration week was not found.
    WeekNotFound(IterationWeekId),
    /// Member was not found.
    MemberNotFound(TeamMemberId),
    /// No availability row exists yet for the (week, member) pair.
    AvailabilityNotFound {
        week_id: IterationWeekId,
        member_id: TeamMemberId,
    },
    /// The iteration date range is invalid.
    InvalidDateRange(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CapacityError {
    pub fn team_not_found(id: TeamId) -> Self {
        CapacityError::TeamNotFound(id)
    }

    pub fn iteration_not_found(id: IterationId) -> Self {
        CapacityError::IterationNotFound(id)
    }

    pub fn week_not_found(id: IterationWeekId) -> Self {
        CapacityError::WeekNotFound(id)
    }

    pub fn member_not_found(id: TeamMemberId) -> Self {
        CapacityError::MemberNotFound(id)
    }

    pub fn availability_not_found(week_id: IterationWeekId, member_id: TeamMemberId) -> Self {
        CapacityError::AvailabilityNotFound { week_id, member_id }
    }

    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        CapacityError::InvalidDateRange(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CapacityError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CapacityError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CapacityError::TeamNotFound(_) => ErrorCode::TeamNotFound,
            CapacityError::IterationNotFound(_) => ErrorCode::IterationNotFound,
            CapacityError::WeekNotFound(_) => ErrorCode::WeekNotFound,
            CapacityError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            CapacityError::AvailabilityNotFound { .. } => ErrorCode::AvailabilityNotFound,
            CapacityError::InvalidDateRange(_) => ErrorCode::InvalidDateRange,
            CapacityError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CapacityError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CapacityError::TeamNotFound(id) => format!("Team not found: {}", id),
            CapacityError::IterationNotFound(id) => format!("Iteration not found: {}", id),
            CapacityError::WeekNotFound(id) => format!("Iteration week not found: {}", id),
            CapacityError::MemberNotFound(id) => format!("Team member not found: {}", id),
            CapacityError::AvailabilityNotFound { week_id, member_id } => format!(
                "No availability recorded for member {} in week {}",
                member_id, week_id
            ),
            CapacityError::InvalidDateRange(msg) => format!("Invalid date range: {}", msg),
            CapacityError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CapacityError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CapacityError {}

impl From<ValidationError> for CapacityError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidDateRange { reason } => CapacityError::InvalidDateRange(reason),
            ValidationError::EmptyField { ref field }
            | ValidationError::OutOfRange { ref field, .. }
            | ValidationError::InvalidFormat { ref field, .. } => CapacityError::ValidationFailed {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}

impl From<DomainError> for CapacityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidDateRange => CapacityError::InvalidDateRange(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange => {
                CapacityError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => CapacityError::Infrastructure(err.to_string()),
        }
    }
}
