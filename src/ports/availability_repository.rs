//! Availability repository port.
//!
//! Covers both granularities: per-day attendance rows and the week-level
//! availability cell they aggregate into.

use crate::domain::capacity::{DailyAttendance, WeeklyAvailability};
use crate::domain::foundation::{DomainError, IterationWeekId, TeamMemberId};
use async_trait::async_trait;

/// Repository port for weekly availability and daily attendance.
///
/// Writes are idempotent upserts keyed by the natural pair
/// (iteration_week, member) or (member, date). `save_attendance` must
/// write the day rows and the weekly aggregate in one transaction so a
/// reader never observes the days without the recomputed percent.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Find the weekly cell for a (week, member) pair. Returns `None` if
    /// nothing has been recorded yet.
    async fn find_weekly(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Option<WeeklyAvailability>, DomainError>;

    /// The stored daily rows for a (week, member) pair, ordered by date.
    async fn find_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Vec<DailyAttendance>, DomainError>;

    /// Upsert the given day rows and the weekly aggregate atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on failure; the transaction rolls back and no
    ///   partial write remains
    async fn save_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
        days: &[DailyAttendance],
        weekly: &WeeklyAvailability,
    ) -> Result<(), DomainError>;

    /// Upsert a weekly cell alone (override set/clear paths).
    async fn upsert_weekly(&self, weekly: &WeeklyAvailability) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AvailabilityRepository) {}
    }
}
