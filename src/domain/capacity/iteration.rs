//! Iteration aggregate.
//!
//! An iteration is a named, dated planning period for one team. It owns
//! its weekly buckets; availability rows are owned by the
//! iteration/member pairing, not by the week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weeks::span_days;
use crate::domain::foundation::{
    DomainError, IterationId, ProjectId, TeamId, Timestamp, ValidationError,
};

/// Maximum length for iteration names.
pub const MAX_ITERATION_NAME_LENGTH: usize = 200;

/// A time-boxed planning period for a team.
///
/// # Invariants
///
/// - `end_date` is strictly after `start_date`
/// - `name` is 1-200 characters, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iteration {
    id: IterationId,
    project_id: ProjectId,
    team_id: TeamId,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    /// Declared working-days count for the whole iteration, entered by the
    /// planner (holidays already subtracted).
    working_days: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Iteration {
    /// Create a new iteration.
    ///
    /// # Errors
    ///
    /// - `InvalidDateRange` if `end_date <= start_date`
    /// - `ValidationFailed` if the name is empty or too long
    pub fn new(
        id: IterationId,
        project_id: ProjectId,
        team_id: TeamId,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        working_days: u32,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_ITERATION_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("must be at most {} characters", MAX_ITERATION_NAME_LENGTH),
            ));
        }
        if end_date <= start_date {
            return Err(ValidationError::invalid_date_range(
                "end date must be after start date",
            )
            .into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            project_id,
            team_id,
            name,
            start_date,
            end_date,
            working_days,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an iteration from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: IterationId,
        project_id: ProjectId,
        team_id: TeamId,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        working_days: u32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            team_id,
            name,
            start_date,
            end_date,
            working_days,
            created_at,
            updated_at,
        }
    }

    /// Derived week count: `ceil(span_days / 7)` over the inclusive range.
    pub fn weeks_count(&self) -> u32 {
        ((span_days(self.start_date, self.end_date) + 6) / 7) as u32
    }

    pub fn id(&self) -> &IterationId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn iteration(start: NaiveDate, end: NaiveDate) -> Result<Iteration, DomainError> {
        Iteration::new(
            IterationId::new(),
            ProjectId::new(),
            TeamId::new(),
            "Sprint 12".to_string(),
            start,
            end,
            10,
        )
    }

    #[test]
    fn valid_iteration_is_created() {
        let it = iteration(date(2024, 1, 1), date(2024, 1, 14)).unwrap();
        assert_eq!(it.name(), "Sprint 12");
        assert_eq!(it.working_days(), 10);
    }

    #[test]
    fn rejects_end_not_after_start() {
        let err = iteration(date(2024, 1, 14), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);

        let same = iteration(date(2024, 1, 1), date(2024, 1, 1));
        assert!(same.is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let result = Iteration::new(
            IterationId::new(),
            ProjectId::new(),
            TeamId::new(),
            " ".to_string(),
            date(2024, 1, 1),
            date(2024, 1, 14),
            10,
        );
        assert!(result.is_err());
    }

    #[test]
    fn weeks_count_uses_inclusive_span() {
        assert_eq!(
            iteration(date(2024, 1, 1), date(2024, 1, 14)).unwrap().weeks_count(),
            2
        );
        assert_eq!(
            iteration(date(2024, 1, 1), date(2024, 1, 10)).unwrap().weeks_count(),
            2
        );
        assert_eq!(
            iteration(date(2024, 1, 1), date(2024, 1, 2)).unwrap().weeks_count(),
            1
        );
    }
}
