//! CreateIterationHandler - Command handler for creating iterations.
//!
//! Validates the date range, generates the weekly buckets and persists
//! iteration plus weeks atomically through the repository.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::capacity::{
    generate_weeks, CapacityError, Iteration, IterationWeek,
};
use crate::domain::foundation::{IterationId, IterationWeekId, ProjectId, TeamId};
use crate::ports::{IterationRepository, TeamRepository};

/// Command to create a new iteration.
#[derive(Debug, Clone)]
pub struct CreateIterationCommand {
    pub project_id: ProjectId,
    pub team_id: TeamId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days: u32,
}

/// Result of successful iteration creation.
#[derive(Debug, Clone)]
pub struct CreateIterationResult {
    pub iteration: Iteration,
    pub weeks: Vec<IterationWeek>,
}

/// Handler for creating iterations.
pub struct CreateIterationHandler {
    teams: Arc<dyn TeamRepository>,
    iterations: Arc<dyn IterationRepository>,
}

impl CreateIterationHandler {
    pub fn new(teams: Arc<dyn TeamRepository>, iterations: Arc<dyn IterationRepository>) -> Self {
        Self { teams, iterations }
    }

    pub async fn handle(
        &self,
        cmd: CreateIterationCommand,
    ) -> Result<CreateIterationResult, CapacityError> {
        if !self.teams.exists(&cmd.team_id).await? {
            return Err(CapacityError::team_not_found(cmd.team_id));
        }

        let iteration = Iteration::new(
            IterationId::new(),
            cmd.project_id,
            cmd.team_id,
            cmd.name,
            cmd.start_date,
            cmd.end_date,
            cmd.working_days,
        )?;

        let weeks: Vec<IterationWeek> = generate_weeks(cmd.start_date, cmd.end_date)?
            .into_iter()
            .map(|span| IterationWeek::from_span(IterationWeekId::new(), *iteration.id(), span))
            .collect();

        self.iterations.save_with_weeks(&iteration, &weeks).await?;

        tracing::info!(
            iteration_id = %iteration.id(),
            weeks = weeks.len(),
            "iteration created"
        );
        Ok(CreateIterationResult { iteration, weeks })
    }
}
