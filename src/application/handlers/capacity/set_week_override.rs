//! SetWeekOverrideHandler - sets or clears a manual availability override.
//!
//! The calculated percent is stored alongside the override, never replaced
//! by it, so clearing reverts to whatever the daily attendance implies.

use std::sync::Arc;

use crate::domain::capacity::{
    summarize_week, CapacityError, WeeklyAvailability,
};
use crate::domain::foundation::{IterationWeekId, Percentage, TeamMemberId};
use crate::ports::{AvailabilityRepository, IterationRepository, TeamRepository};

/// Command to set (`Some`) or clear (`None`) a week cell's override.
#[derive(Debug, Clone)]
pub struct SetWeekOverrideCommand {
    pub week_id: IterationWeekId,
    pub member_id: TeamMemberId,
    pub override_percent: Option<Percentage>,
}

/// Result of an override change.
#[derive(Debug, Clone)]
pub struct SetWeekOverrideResult {
    pub weekly: WeeklyAvailability,
}

/// Handler for week cell overrides.
pub struct SetWeekOverrideHandler {
    iterations: Arc<dyn IterationRepository>,
    teams: Arc<dyn TeamRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl SetWeekOverrideHandler {
    pub fn new(
        iterations: Arc<dyn IterationRepository>,
        teams: Arc<dyn TeamRepository>,
        availability: Arc<dyn AvailabilityRepository>,
    ) -> Self {
        Self {
            iterations,
            teams,
            availability,
        }
    }

    pub async fn handle(
        &self,
        cmd: SetWeekOverrideCommand,
    ) -> Result<SetWeekOverrideResult, CapacityError> {
        if self.iterations.find_week(&cmd.week_id).await?.is_none() {
            return Err(CapacityError::WeekNotFound(cmd.week_id));
        }
        if self.teams.find_member(&cmd.member_id).await?.is_none() {
            return Err(CapacityError::MemberNotFound(cmd.member_id));
        }

        let existing = self
            .availability
            .find_weekly(&cmd.week_id, &cmd.member_id)
            .await?;

        let weekly = match (existing, cmd.override_percent) {
            (Some(mut row), Some(value)) => {
                row.set_override(value);
                row
            }
            (Some(mut row), None) => {
                row.clear_override();
                row
            }
            // A planner may override a cell before any attendance exists.
            (None, Some(value)) => {
                let mut row = WeeklyAvailability::from_attendance(
                    cmd.week_id,
                    cmd.member_id,
                    summarize_week(&[]),
                );
                row.set_override(value);
                row
            }
            (None, None) => {
                return Err(CapacityError::availability_not_found(
                    cmd.week_id,
                    cmd.member_id,
                ));
            }
        };

        self.availability.upsert_weekly(&weekly).await?;

        tracing::info!(
            week_id = %cmd.week_id,
            member_id = %cmd.member_id,
            overridden = weekly.percent().is_overridden(),
            "week override updated"
        );
        Ok(SetWeekOverrideResult { weekly })
    }
}
