//! AddMemberHandler - Command handler for adding a member to a team roster.

use std::sync::Arc;

use crate::domain::capacity::WorkMode;
use crate::domain::foundation::{Percentage, TeamId, TeamMemberId};
use crate::domain::team::{TeamError, TeamMember};
use crate::ports::TeamRepository;

/// Command to add a member to a team.
#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    pub team_id: TeamId,
    pub display_name: String,
    pub role: Option<String>,
    pub default_work_mode: WorkMode,
    pub default_availability: Percentage,
}

/// Result of successful member creation.
#[derive(Debug, Clone)]
pub struct AddMemberResult {
    pub member: TeamMember,
}

/// Handler for adding members.
pub struct AddMemberHandler {
    teams: Arc<dyn TeamRepository>,
}

impl AddMemberHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: AddMemberCommand) -> Result<AddMemberResult, TeamError> {
        if !self.teams.exists(&cmd.team_id).await? {
            return Err(TeamError::not_found(cmd.team_id));
        }

        let member = TeamMember::new(
            TeamMemberId::new(),
            cmd.team_id,
            cmd.display_name,
            cmd.role,
            cmd.default_work_mode,
            cmd.default_availability,
        )?;
        self.teams.add_member(&member).await?;

        tracing::info!(member_id = %member.id(), team_id = %member.team_id(), "member added");
        Ok(AddMemberResult { member })
    }
}
