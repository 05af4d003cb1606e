//! RecordDailyAttendanceHandler - saves daily attendance for a week cell.
//!
//! Incoming day entries are merged over whatever is already stored, so
//! toggling a single day touches only that day's row. The weekly
//! calculated percent is refreshed from the merged set and written in the
//! same transaction as the day rows; an existing manual override is
//! preserved.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::capacity::{
    is_business_day, summarize_week, AttendanceStatus, CapacityError, DailyAttendance,
    WeeklyAvailability,
};
use crate::domain::foundation::{IterationWeekId, TeamMemberId};
use crate::ports::{AvailabilityRepository, IterationRepository, TeamRepository};

/// Command carrying one or more (date, status) entries for a member/week.
#[derive(Debug, Clone)]
pub struct RecordDailyAttendanceCommand {
    pub week_id: IterationWeekId,
    pub member_id: TeamMemberId,
    pub entries: Vec<(NaiveDate, AttendanceStatus)>,
}

/// Result of an attendance save.
#[derive(Debug, Clone)]
pub struct RecordDailyAttendanceResult {
    pub weekly: WeeklyAvailability,
}

/// Handler for daily attendance entry.
pub struct RecordDailyAttendanceHandler {
    iterations: Arc<dyn IterationRepository>,
    teams: Arc<dyn TeamRepository>,
    availability: Arc<dyn AvailabilityRepository>,
}

impl RecordDailyAttendanceHandler {
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
        cmd: RecordDailyAttendanceCommand,
    ) -> Result<RecordDailyAttendanceResult, CapacityError> {
        if cmd.entries.is_empty() {
            return Err(CapacityError::validation("entries", "must not be empty"));
        }

        let week = self
            .iterations
            .find_week(&cmd.week_id)
            .await?
            .ok_or(CapacityError::WeekNotFound(cmd.week_id))?;
        if self.teams.find_member(&cmd.member_id).await?.is_none() {
            return Err(CapacityError::MemberNotFound(cmd.member_id));
        }

        for (date, _) in &cmd.entries {
            if *date < week.week_start() || *date > week.week_end() {
                return Err(CapacityError::validation(
                    "entries",
                    format!("date {} is outside week {}", date, week.index()),
                ));
            }
            if !is_business_day(*date) {
                return Err(CapacityError::validation(
                    "entries",
                    format!("date {} falls on a weekend", date),
                ));
            }
        }

        let incoming: Vec<DailyAttendance> = cmd
            .entries
            .iter()
            .map(|(date, status)| DailyAttendance::new(*date, *status))
            .collect();

        // Merge over stored rows; only the submitted dates change.
        let mut merged: BTreeMap<NaiveDate, DailyAttendance> = self
            .availability
            .find_attendance(&cmd.week_id, &cmd.member_id)
            .await?
            .into_iter()
            .map(|d| (d.date, d))
            .collect();
        for day in &incoming {
            merged.insert(day.date, *day);
        }
        let merged_days: Vec<DailyAttendance> = merged.into_values().collect();
        let summary = summarize_week(&merged_days);

        let weekly = match self
            .availability
            .find_weekly(&cmd.week_id, &cmd.member_id)
            .await?
        {
            Some(mut existing) => {
                existing.apply_attendance(summary);
                existing
            }
            None => WeeklyAvailability::from_attendance(cmd.week_id, cmd.member_id, summary),
        };

        self.availability
            .save_attendance(&cmd.week_id, &cmd.member_id, &incoming, &weekly)
            .await?;

        tracing::info!(
            week_id = %cmd.week_id,
            member_id = %cmd.member_id,
            percent = %weekly.percent().calculated(),
            "attendance saved"
        );
        Ok(RecordDailyAttendanceResult { weekly })
    }
}
