//! HTTP DTOs for capacity and availability endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::capacity::{
    AttendanceStatus, CapacityMember, DailyAttendance, IterationCapacitySummary,
    TeamCapacitySummary, WeeklyAvailability,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to save a member's capacity inputs for an iteration.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCapacityRequest {
    /// Planned leave days; fractional values are allowed.
    pub leaves: Decimal,
    /// Availability percent (0-100).
    pub availability_percent: u8,
    /// Wire string, e.g. "office", "work-from-home", "hybrid".
    pub work_mode: String,
}

/// One (date, status) attendance entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendanceEntryDto {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Request to record daily attendance for a member's week.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAttendanceRequest {
    pub entries: Vec<AttendanceEntryDto>,
}

/// Request to set a manual override on a week cell.
#[derive(Debug, Clone, Deserialize)]
pub struct SetOverrideRequest {
    /// Override percent (0-100).
    pub override_percent: u8,
}

/// Query string for the iteration summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryParams {
    /// When true, include per-team subtotals.
    #[serde(default)]
    pub by_team: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a member's capacity snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CapacityResponse {
    pub iteration_id: String,
    pub member_id: String,
    pub team_id: String,
    pub leaves: Decimal,
    pub availability_percent: u8,
    pub work_mode: String,
    pub effective_capacity_days: Decimal,
    pub updated_at: String,
}

impl From<&CapacityMember> for CapacityResponse {
    fn from(member: &CapacityMember) -> Self {
        Self {
            iteration_id: member.iteration_id().to_string(),
            member_id: member.member_id().to_string(),
            team_id: member.team_id().to_string(),
            leaves: member.leaves(),
            availability_percent: member.availability().value(),
            work_mode: member.work_mode().as_wire().to_string(),
            effective_capacity_days: member.effective_capacity_days(),
            updated_at: member.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a member's weekly availability cell.
///
/// Carries both the calculated and the override branch so clients can show
/// the discrepancy between entered attendance and the pinned value.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyAvailabilityResponse {
    pub week_id: String,
    pub member_id: String,
    /// The percent downstream consumers use (override when present).
    pub availability_percent: u8,
    pub calculated_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_percent: Option<u8>,
    pub days_present: u8,
    pub days_total: u8,
    pub updated_at: String,
}

impl From<&WeeklyAvailability> for WeeklyAvailabilityResponse {
    fn from(weekly: &WeeklyAvailability) -> Self {
        let override_percent = weekly
            .percent()
            .is_overridden()
            .then(|| weekly.effective_percent().value());
        Self {
            week_id: weekly.week_id().to_string(),
            member_id: weekly.member_id().to_string(),
            availability_percent: weekly.effective_percent().value(),
            calculated_percent: weekly.percent().calculated().value(),
            override_percent,
            days_present: weekly.days_present(),
            days_total: weekly.days_total(),
            updated_at: weekly.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Weekly cell plus its daily rows.
#[derive(Debug, Clone, Serialize)]
pub struct WeekAvailabilityResponse {
    pub weekly: WeeklyAvailabilityResponse,
    pub days: Vec<AttendanceEntryDto>,
}

impl WeekAvailabilityResponse {
    pub fn new(weekly: &WeeklyAvailability, days: &[DailyAttendance]) -> Self {
        Self {
            weekly: WeeklyAvailabilityResponse::from(weekly),
            days: days
                .iter()
                .map(|d| AttendanceEntryDto {
                    date: d.date,
                    status: d.status,
                })
                .collect(),
        }
    }
}

/// Per-team subtotal within an iteration summary.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummaryResponse {
    pub team_id: String,
    pub total_effective_capacity: Decimal,
    pub total_members: u32,
}

impl From<&TeamCapacitySummary> for TeamSummaryResponse {
    fn from(summary: &TeamCapacitySummary) -> Self {
        Self {
            team_id: summary.team_id.to_string(),
            total_effective_capacity: summary.total_effective_capacity,
            total_members: summary.total_members,
        }
    }
}

/// Response for the iteration capacity rollup.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub iteration_id: String,
    pub total_effective_capacity: Decimal,
    pub total_members: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TeamSummaryResponse>>,
}

impl SummaryResponse {
    pub fn new(
        summary: &IterationCapacitySummary,
        teams: Option<&Vec<TeamCapacitySummary>>,
    ) -> Self {
        Self {
            iteration_id: summary.iteration_id.to_string(),
            total_effective_capacity: summary.total_effective_capacity,
            total_members: summary.total_members,
            teams: teams.map(|ts| ts.iter().map(TeamSummaryResponse::from).collect()),
        }
    }
}
