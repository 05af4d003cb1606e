//! HTTP handlers for capacity and availability endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::capacity::{
    GetIterationSummaryHandler, GetIterationSummaryQuery, GetWeekAvailabilityHandler,
    GetWeekAvailabilityQuery, RecordDailyAttendanceCommand, RecordDailyAttendanceHandler,
    SaveMemberCapacityCommand, SaveMemberCapacityHandler, SetWeekOverrideCommand,
    SetWeekOverrideHandler,
};
use crate::domain::capacity::{ModeWeights, WorkMode};
use crate::domain::foundation::{IterationId, IterationWeekId, Percentage, TeamMemberId};
use crate::ports::{
    AvailabilityRepository, CapacityRepository, IterationRepository, TeamRepository,
};

use super::dto::{
    CapacityResponse, RecordAttendanceRequest, SaveCapacityRequest, SetOverrideRequest,
    SummaryParams, SummaryResponse, WeekAvailabilityResponse, WeeklyAvailabilityResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for capacity endpoints.
#[derive(Clone)]
pub struct CapacityAppState {
    pub team_repository: Arc<dyn TeamRepository>,
    pub iteration_repository: Arc<dyn IterationRepository>,
    pub availability_repository: Arc<dyn AvailabilityRepository>,
    pub capacity_repository: Arc<dyn CapacityRepository>,
    pub mode_weights: ModeWeights,
}

impl CapacityAppState {
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        iteration_repository: Arc<dyn IterationRepository>,
        availability_repository: Arc<dyn AvailabilityRepository>,
        capacity_repository: Arc<dyn CapacityRepository>,
        mode_weights: ModeWeights,
    ) -> Self {
        Self {
            team_repository,
            iteration_repository,
            availability_repository,
            capacity_repository,
            mode_weights,
        }
    }

    pub fn save_capacity_handler(&self) -> SaveMemberCapacityHandler {
        SaveMemberCapacityHandler::new(
            self.iteration_repository.clone(),
            self.team_repository.clone(),
            self.capacity_repository.clone(),
            self.mode_weights,
        )
    }

    pub fn summary_handler(&self) -> GetIterationSummaryHandler {
        GetIterationSummaryHandler::new(
            self.iteration_repository.clone(),
            self.capacity_repository.clone(),
        )
    }

    pub fn attendance_handler(&self) -> RecordDailyAttendanceHandler {
        RecordDailyAttendanceHandler::new(
            self.iteration_repository.clone(),
            self.team_repository.clone(),
            self.availability_repository.clone(),
        )
    }

    pub fn week_availability_handler(&self) -> GetWeekAvailabilityHandler {
        GetWeekAvailabilityHandler::new(self.availability_repository.clone())
    }

    pub fn override_handler(&self) -> SetWeekOverrideHandler {
        SetWeekOverrideHandler::new(
            self.iteration_repository.clone(),
            self.team_repository.clone(),
            self.availability_repository.clone(),
        )
    }
}

fn parse_iteration_id(s: &str) -> Result<IterationId, ApiError> {
    s.parse()
        .map_err(|_| ApiError::bad_request("Invalid iteration ID format"))
}

fn parse_week_id(s: &str) -> Result<IterationWeekId, ApiError> {
    s.parse()
        .map_err(|_| ApiError::bad_request("Invalid week ID format"))
}

fn parse_member_id(s: &str) -> Result<TeamMemberId, ApiError> {
    s.parse()
        .map_err(|_| ApiError::bad_request("Invalid member ID format"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Capacity Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/iterations/:id/members/:member_id/capacity - Upsert capacity inputs
pub async fn save_member_capacity(
    State(state): State<CapacityAppState>,
    Path((iteration_id, member_id)): Path<(String, String)>,
    Json(request): Json<SaveCapacityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let iteration_id = parse_iteration_id(&iteration_id)?;
    let member_id = parse_member_id(&member_id)?;
    let availability = Percentage::try_new(request.availability_percent)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let result = state
        .save_capacity_handler()
        .handle(SaveMemberCapacityCommand {
            iteration_id,
            member_id,
            leaves: request.leaves,
            availability,
            work_mode: WorkMode::from_wire(&request.work_mode),
        })
        .await?;

    Ok(Json(CapacityResponse::from(&result.snapshot)))
}

/// GET /api/iterations/:id/summary - Iteration capacity rollup
pub async fn get_iteration_summary(
    State(state): State<CapacityAppState>,
    Path(iteration_id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let iteration_id = parse_iteration_id(&iteration_id)?;

    let view = state
        .summary_handler()
        .handle(GetIterationSummaryQuery {
            iteration_id,
            by_team: params.by_team,
        })
        .await?;

    Ok(Json(SummaryResponse::new(&view.summary, view.teams.as_ref())))
}

// ════════════════════════════════════════════════════════════════════════════════
// Availability Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/weeks/:week_id/members/:member_id/attendance - Save daily entries
pub async fn record_attendance(
    State(state): State<CapacityAppState>,
    Path((week_id, member_id)): Path<(String, String)>,
    Json(request): Json<RecordAttendanceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let week_id = parse_week_id(&week_id)?;
    let member_id = parse_member_id(&member_id)?;

    let result = state
        .attendance_handler()
        .handle(RecordDailyAttendanceCommand {
            week_id,
            member_id,
            entries: request.entries.iter().map(|e| (e.date, e.status)).collect(),
        })
        .await?;

    Ok(Json(WeeklyAvailabilityResponse::from(&result.weekly)))
}

/// GET /api/weeks/:week_id/members/:member_id/availability - Read a week cell
pub async fn get_week_availability(
    State(state): State<CapacityAppState>,
    Path((week_id, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let week_id = parse_week_id(&week_id)?;
    let member_id = parse_member_id(&member_id)?;

    let view = state
        .week_availability_handler()
        .handle(GetWeekAvailabilityQuery { week_id, member_id })
        .await?;

    Ok(Json(WeekAvailabilityResponse::new(&view.weekly, &view.days)))
}

/// PUT /api/weeks/:week_id/members/:member_id/override - Pin the week percent
pub async fn set_week_override(
    State(state): State<CapacityAppState>,
    Path((week_id, member_id)): Path<(String, String)>,
    Json(request): Json<SetOverrideRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let week_id = parse_week_id(&week_id)?;
    let member_id = parse_member_id(&member_id)?;
    let value = Percentage::try_new(request.override_percent)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let result = state
        .override_handler()
        .handle(SetWeekOverrideCommand {
            week_id,
            member_id,
            override_percent: Some(value),
        })
        .await?;

    Ok(Json(WeeklyAvailabilityResponse::from(&result.weekly)))
}

/// DELETE /api/weeks/:week_id/members/:member_id/override - Clear the override
pub async fn clear_week_override(
    State(state): State<CapacityAppState>,
    Path((week_id, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let week_id = parse_week_id(&week_id)?;
    let member_id = parse_member_id(&member_id)?;

    let result = state
        .override_handler()
        .handle(SetWeekOverrideCommand {
            week_id,
            member_id,
            override_percent: None,
        })
        .await?;

    Ok(Json(WeeklyAvailabilityResponse::from(&result.weekly)))
}
