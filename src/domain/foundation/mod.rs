//! Shared value objects and error types used across domain modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{IterationId, IterationWeekId, ProjectId, TeamId, TeamMemberId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
