//! Daily/weekly availability aggregation.
//!
//! Reconciles fine-grained daily attendance with week-level availability
//! percentages. A planner may override the calculated percent; both values
//! persist so a later attendance edit never silently discards the override
//! and the UI can surface the discrepancy.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IterationWeekId, Percentage, TeamMemberId, Timestamp};

/// Attendance status for a single business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One member's attendance on one business day of a week.
///
/// Rows exist only for Monday-Friday; weekends are not planning-relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl DailyAttendance {
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self { date, status }
    }

    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// Whether a date falls on a business day (Monday-Friday).
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Aggregate of a week's daily attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAttendanceSummary {
    pub days_present: u8,
    pub days_total: u8,
    pub percent: Percentage,
}

/// Aggregates daily rows into the weekly calculated percent.
///
/// Weekend entries are ignored entirely: they count toward neither
/// `days_present` nor `days_total`. The percent is
/// `round(present / total × 100)`, half-up.
pub fn summarize_week(days: &[DailyAttendance]) -> WeekAttendanceSummary {
    let business: Vec<&DailyAttendance> =
        days.iter().filter(|d| is_business_day(d.date)).collect();
    let days_total = business.len() as u8;
    let days_present = business.iter().filter(|d| d.is_present()).count() as u8;

    WeekAttendanceSummary {
        days_present,
        days_total,
        percent: Percentage::from_ratio(days_present as u32, days_total as u32),
    }
}

/// Week-level availability percent with explicit override precedence.
///
/// The calculated branch always survives an override, so clearing the
/// override reverts to whatever daily attendance currently implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AvailabilityPercent {
    Calculated(Percentage),
    Overridden {
        value: Percentage,
        calculated: Percentage,
    },
}

impl AvailabilityPercent {
    /// The value downstream consumers must use: the override when present,
    /// the calculated percent otherwise.
    pub fn effective(&self) -> Percentage {
        match self {
            AvailabilityPercent::Calculated(p) => *p,
            AvailabilityPercent::Overridden { value, .. } => *value,
        }
    }

    /// The calculated branch, regardless of any override.
    pub fn calculated(&self) -> Percentage {
        match self {
            AvailabilityPercent::Calculated(p) => *p,
            AvailabilityPercent::Overridden { calculated, .. } => *calculated,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, AvailabilityPercent::Overridden { .. })
    }

    /// Applies a manual override, keeping the calculated value alongside.
    pub fn with_override(self, value: Percentage) -> Self {
        AvailabilityPercent::Overridden {
            value,
            calculated: self.calculated(),
        }
    }

    /// Removes the override, reverting to the calculated value.
    pub fn clear_override(self) -> Self {
        AvailabilityPercent::Calculated(self.calculated())
    }

    /// Refreshes the calculated branch after a daily attendance edit.
    /// An existing override is preserved.
    pub fn recalculated(self, calculated: Percentage) -> Self {
        match self {
            AvailabilityPercent::Calculated(_) => AvailabilityPercent::Calculated(calculated),
            AvailabilityPercent::Overridden { value, .. } => {
                AvailabilityPercent::Overridden { value, calculated }
            }
        }
    }
}

/// A member's availability for one iteration week.
///
/// Unique per (iteration_week, member). Created or updated whenever a
/// planner edits a week cell or saves daily attendance; deleted only via
/// cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    week_id: IterationWeekId,
    member_id: TeamMemberId,
    percent: AvailabilityPercent,
    days_present: u8,
    days_total: u8,
    updated_at: Timestamp,
}

impl WeeklyAvailability {
    /// Creates a fresh row from aggregated daily attendance.
    pub fn from_attendance(
        week_id: IterationWeekId,
        member_id: TeamMemberId,
        summary: WeekAttendanceSummary,
    ) -> Self {
        Self {
            week_id,
            member_id,
            percent: AvailabilityPercent::Calculated(summary.percent),
            days_present: summary.days_present,
            days_total: summary.days_total,
            updated_at: Timestamp::now(),
        }
    }

    /// Reconstitute a row from persistence.
    pub fn reconstitute(
        week_id: IterationWeekId,
        member_id: TeamMemberId,
        percent: AvailabilityPercent,
        days_present: u8,
        days_total: u8,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            week_id,
            member_id,
            percent,
            days_present,
            days_total,
            updated_at,
        }
    }

    /// Applies a refreshed attendance aggregate, preserving any override.
    pub fn apply_attendance(&mut self, summary: WeekAttendanceSummary) {
        self.percent = self.percent.recalculated(summary.percent);
        self.days_present = summary.days_present;
        self.days_total = summary.days_total;
        self.updated_at = Timestamp::now();
    }

    /// Sets a manual override on the week cell.
    pub fn set_override(&mut self, value: Percentage) {
        self.percent = self.percent.with_override(value);
        self.updated_at = Timestamp::now();
    }

    /// Clears the override, reverting to the calculated percent.
    pub fn clear_override(&mut self) {
        self.percent = self.percent.clear_override();
        self.updated_at = Timestamp::now();
    }

    pub fn week_id(&self) -> &IterationWeekId {
        &self.week_id
    }

    pub fn member_id(&self) -> &TeamMemberId {
        &self.member_id
    }

    pub fn percent(&self) -> &AvailabilityPercent {
        &self.percent
    }

    /// The percent downstream consumers use.
    pub fn effective_percent(&self) -> Percentage {
        self.percent.effective()
    }

    pub fn days_present(&self) -> u8 {
        self.days_present
    }

    pub fn days_total(&self) -> u8 {
        self.days_total
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
