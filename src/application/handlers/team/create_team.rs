//! CreateTeamHandler - Command handler for creating teams.

use std::sync::Arc;

use crate::domain::foundation::{ProjectId, TeamId};
use crate::domain::team::{Team, TeamError};
use crate::ports::TeamRepository;

/// Command to create a new team.
#[derive(Debug, Clone)]
pub struct CreateTeamCommand {
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
}

/// Result of successful team creation.
#[derive(Debug, Clone)]
pub struct CreateTeamResult {
    pub team: Team,
}

/// Handler for creating teams.
pub struct CreateTeamHandler {
    teams: Arc<dyn TeamRepository>,
}

impl CreateTeamHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: CreateTeamCommand) -> Result<CreateTeamResult, TeamError> {
        let team = Team::new(TeamId::new(), cmd.project_id, cmd.name, cmd.description)?;
        self.teams.save(&team).await?;

        tracing::info!(team_id = %team.id(), "team created");
        Ok(CreateTeamResult { team })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryTeams;

    #[tokio::test]
    async fn creates_team_with_valid_input() {
        let repo = Arc::new(InMemoryTeams::new());
        let handler = CreateTeamHandler::new(repo.clone());

        let result = handler
            .handle(CreateTeamCommand {
                project_id: ProjectId::new(),
                name: "Platform".to_string(),
                description: Some("infra team".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.team.name(), "Platform");
        assert_eq!(repo.teams.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_name_without_saving() {
        let repo = Arc::new(InMemoryTeams::new());
        let handler = CreateTeamHandler::new(repo.clone());

        let result = handler
            .handle(CreateTeamCommand {
                project_id: ProjectId::new(),
                name: "  ".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(TeamError::ValidationFailed { .. })));
        assert!(repo.teams.lock().unwrap().is_empty());
    }
}
