//! HTTP handlers for team endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::team::{
    AddMemberCommand, AddMemberHandler, CreateTeamCommand, CreateTeamHandler, ListMembersHandler,
    ListMembersQuery,
};
use crate::domain::capacity::WorkMode;
use crate::domain::foundation::{Percentage, ProjectId, TeamId};
use crate::ports::TeamRepository;

use super::dto::{AddMemberRequest, CreateTeamRequest, MemberResponse, TeamResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for team endpoints.
#[derive(Clone)]
pub struct TeamAppState {
    pub team_repository: Arc<dyn TeamRepository>,
}

impl TeamAppState {
    pub fn new(team_repository: Arc<dyn TeamRepository>) -> Self {
        Self { team_repository }
    }

    pub fn create_team_handler(&self) -> CreateTeamHandler {
        CreateTeamHandler::new(self.team_repository.clone())
    }

    pub fn add_member_handler(&self) -> AddMemberHandler {
        AddMemberHandler::new(self.team_repository.clone())
    }

    pub fn list_members_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.team_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/teams - Create a new team
pub async fn create_team(
    State(state): State<TeamAppState>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = request
        .project_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid project ID format"))?;

    let result = state
        .create_team_handler()
        .handle(CreateTeamCommand {
            project_id,
            name: request.name,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&result.team))))
}

/// POST /api/teams/:team_id/members - Add a member to the roster
pub async fn add_member(
    State(state): State<TeamAppState>,
    Path(team_id): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let team_id: TeamId = team_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid team ID format"))?;
    let availability = match request.availability_percent {
        Some(value) => Percentage::try_new(value)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => Percentage::HUNDRED,
    };
    let work_mode = request
        .work_mode
        .as_deref()
        .map(WorkMode::from_wire)
        .unwrap_or(WorkMode::Office);

    let result = state
        .add_member_handler()
        .handle(AddMemberCommand {
            team_id,
            display_name: request.display_name,
            role: request.role,
            default_work_mode: work_mode,
            default_availability: availability,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberResponse::from(&result.member)),
    ))
}

/// GET /api/teams/:team_id/members - List the roster
pub async fn list_members(
    State(state): State<TeamAppState>,
    Path(team_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let team_id: TeamId = team_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid team ID format"))?;

    let members = state
        .list_members_handler()
        .handle(ListMembersQuery { team_id })
        .await?;

    let response: Vec<MemberResponse> = members.iter().map(MemberResponse::from).collect();
    Ok(Json(response))
}
