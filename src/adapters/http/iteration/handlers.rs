//! HTTP handlers for iteration endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::iteration::{
    CreateIterationCommand, CreateIterationHandler, GetIterationHandler, GetIterationQuery,
};
use crate::domain::foundation::{IterationId, ProjectId, TeamId};
use crate::ports::{IterationRepository, TeamRepository};

use super::dto::{CreateIterationRequest, IterationResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for iteration endpoints.
#[derive(Clone)]
pub struct IterationAppState {
    pub team_repository: Arc<dyn TeamRepository>,
    pub iteration_repository: Arc<dyn IterationRepository>,
}

impl IterationAppState {
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        iteration_repository: Arc<dyn IterationRepository>,
    ) -> Self {
        Self {
            team_repository,
            iteration_repository,
        }
    }

    pub fn create_iteration_handler(&self) -> CreateIterationHandler {
        CreateIterationHandler::new(
            self.team_repository.clone(),
            self.iteration_repository.clone(),
        )
    }

    pub fn get_iteration_handler(&self) -> GetIterationHandler {
        GetIterationHandler::new(self.iteration_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/iterations - Create an iteration with its generated weeks
pub async fn create_iteration(
    State(state): State<IterationAppState>,
    Json(request): Json<CreateIterationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id: ProjectId = request
        .project_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid project ID format"))?;
    let team_id: TeamId = request
        .team_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid team ID format"))?;

    let result = state
        .create_iteration_handler()
        .handle(CreateIterationCommand {
            project_id,
            team_id,
            name: request.name,
            start_date: request.start_date,
            end_date: request.end_date,
            working_days: request.working_days,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(IterationResponse::new(&result.iteration, &result.weeks)),
    ))
}

/// GET /api/iterations/:id - Read an iteration and its weeks
pub async fn get_iteration(
    State(state): State<IterationAppState>,
    Path(iteration_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let iteration_id: IterationId = iteration_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid iteration ID format"))?;

    let view = state
        .get_iteration_handler()
        .handle(GetIterationQuery { iteration_id })
        .await?;

    Ok(Json(IterationResponse::new(&view.iteration, &view.weeks)))
}
