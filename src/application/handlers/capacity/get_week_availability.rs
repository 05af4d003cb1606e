//! GetWeekAvailabilityHandler - reads one member's week cell.

use std::sync::Arc;

use crate::domain::capacity::{CapacityError, DailyAttendance, WeeklyAvailability};
use crate::domain::foundation::{IterationWeekId, TeamMemberId};
use crate::ports::AvailabilityRepository;

/// Query for a (week, member) availability cell.
#[derive(Debug, Clone)]
pub struct GetWeekAvailabilityQuery {
    pub week_id: IterationWeekId,
    pub member_id: TeamMemberId,
}

/// The week cell plus its daily rows. Exposes both the calculated and
/// the override branch so the UI can surface any discrepancy.
#[derive(Debug, Clone)]
pub struct WeekAvailabilityView {
    pub weekly: WeeklyAvailability,
    pub days: Vec<DailyAttendance>,
}

/// Handler for reading week cells.
pub struct GetWeekAvailabilityHandler {
    availability: Arc<dyn AvailabilityRepository>,
}

impl GetWeekAvailabilityHandler {
    pub fn new(availability: Arc<dyn AvailabilityRepository>) -> Self {
        Self { availability }
    }

    pub async fn handle(
        &self,
        query: GetWeekAvailabilityQuery,
    ) -> Result<WeekAvailabilityView, CapacityError> {
        let weekly = self
            .availability
            .find_weekly(&query.week_id, &query.member_id)
            .await?
            .ok_or(CapacityError::AvailabilityNotFound {
                week_id: query.week_id,
                member_id: query.member_id,
            })?;
        let days = self
            .availability
            .find_attendance(&query.week_id, &query.member_id)
            .await?;

        Ok(WeekAvailabilityView { weekly, days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryAvailability;
    use crate::domain::capacity::{summarize_week, AttendanceStatus};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn returns_cell_with_days() {
        let availability = Arc::new(InMemoryAvailability::new());
        let week_id = IterationWeekId::new();
        let member_id = TeamMemberId::new();

        let days: Vec<DailyAttendance> = (1..=5)
            .map(|d| {
                DailyAttendance::new(
                    NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    AttendanceStatus::Present,
                )
            })
            .collect();
        let weekly = WeeklyAvailability::from_attendance(week_id, member_id, summarize_week(&days));
        availability
            .save_attendance(&week_id, &member_id, &days, &weekly)
            .await
            .unwrap();

        let handler = GetWeekAvailabilityHandler::new(availability);
        let view = handler
            .handle(GetWeekAvailabilityQuery { week_id, member_id })
            .await
            .unwrap();

        assert_eq!(view.days.len(), 5);
        assert_eq!(view.weekly.effective_percent().value(), 100);
    }

    #[tokio::test]
    async fn missing_cell_is_not_found() {
        let handler = GetWeekAvailabilityHandler::new(Arc::new(InMemoryAvailability::new()));
        let result = handler
            .handle(GetWeekAvailabilityQuery {
                week_id: IterationWeekId::new(),
                member_id: TeamMemberId::new(),
            })
            .await;
        assert!(matches!(
            result,
            Err(CapacityError::AvailabilityNotFound { .. })
        ));
    }
}
