//! HTTP DTOs for team endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::team::{Team, TeamMember};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    /// The project the team belongs to.
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Request to add a member to a team roster.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMemberRequest {
    pub display_name: String,
    pub role: Option<String>,
    /// Wire string, e.g. "office", "work-from-home", "hybrid".
    /// Defaults to "office" when omitted.
    pub work_mode: Option<String>,
    /// Default availability percent (0-100). Defaults to 100 when omitted.
    pub availability_percent: Option<u8>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for team details.
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    /// When the team was created (ISO 8601).
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            project_id: team.project_id().to_string(),
            name: team.name().to_string(),
            description: team.description().map(str::to_string),
            created_at: team.created_at().as_datetime().to_rfc3339(),
            updated_at: team.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a roster member.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub team_id: String,
    pub display_name: String,
    pub role: Option<String>,
    pub work_mode: String,
    pub availability_percent: u8,
    pub created_at: String,
}

impl From<&TeamMember> for MemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id().to_string(),
            team_id: member.team_id().to_string(),
            display_name: member.display_name().to_string(),
            role: member.role().map(str::to_string),
            work_mode: member.default_work_mode().as_wire().to_string(),
            availability_percent: member.default_availability().value(),
            created_at: member.created_at().as_datetime().to_rfc3339(),
        }
    }
}
