//! ListMembersHandler - Query handler for a team's roster.

use std::sync::Arc;

use crate::domain::foundation::TeamId;
use crate::domain::team::{TeamError, TeamMember};
use crate::ports::TeamRepository;

/// Query for a team's member roster.
#[derive(Debug, Clone)]
pub struct ListMembersQuery {
    pub team_id: TeamId,
}

/// Handler for listing a team's members.
pub struct ListMembersHandler {
    teams: Arc<dyn TeamRepository>,
}

impl ListMembersHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, query: ListMembersQuery) -> Result<Vec<TeamMember>, TeamError> {
        if !self.teams.exists(&query.team_id).await? {
            return Err(TeamError::not_found(query.team_id));
        }
        Ok(self.teams.find_members_by_team(&query.team_id).await?)
    }
}
