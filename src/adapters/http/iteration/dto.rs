//! HTTP DTOs for iteration endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::capacity::{Iteration, IterationWeek};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new iteration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIterationRequest {
    pub project_id: String,
    pub team_id: String,
    pub name: String,
    /// Inclusive start date (ISO 8601, e.g. "2024-01-01").
    pub start_date: NaiveDate,
    /// Inclusive end date; must be strictly after `start_date`.
    pub end_date: NaiveDate,
    /// Planner-declared working days for the whole iteration.
    pub working_days: u32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for iteration details, including the generated weeks.
#[derive(Debug, Clone, Serialize)]
pub struct IterationResponse {
    pub id: String,
    pub project_id: String,
    pub team_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days: u32,
    pub weeks: Vec<IterationWeekResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl IterationResponse {
    pub fn new(iteration: &Iteration, weeks: &[IterationWeek]) -> Self {
        Self {
            id: iteration.id().to_string(),
            project_id: iteration.project_id().to_string(),
            team_id: iteration.team_id().to_string(),
            name: iteration.name().to_string(),
            start_date: iteration.start_date(),
            end_date: iteration.end_date(),
            working_days: iteration.working_days(),
            weeks: weeks.iter().map(IterationWeekResponse::from).collect(),
            created_at: iteration.created_at().as_datetime().to_rfc3339(),
            updated_at: iteration.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// One weekly bucket of an iteration.
#[derive(Debug, Clone, Serialize)]
pub struct IterationWeekResponse {
    pub id: String,
    /// 1-based position within the iteration.
    pub index: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl From<&IterationWeek> for IterationWeekResponse {
    fn from(week: &IterationWeek) -> Self {
        Self {
            id: week.id().to_string(),
            index: week.index(),
            week_start: week.week_start(),
            week_end: week.week_end(),
        }
    }
}
