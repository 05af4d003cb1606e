//! Team and TeamMember entities.
//!
//! A team belongs to one project and owns its member roster. Capacity rows
//! reference members by ID but do not own them; deleting a team cascades to
//! members and iterations at the storage layer.

use serde::{Deserialize, Serialize};

use crate::domain::capacity::WorkMode;
use crate::domain::foundation::{
    DomainError, Percentage, ProjectId, TeamId, TeamMemberId, Timestamp, ValidationError,
};

/// Maximum length for team and member names.
pub const MAX_NAME_LENGTH: usize = 200;

/// A team inside a project.
///
/// # Invariants
///
/// - `name` is 1-200 characters, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    project_id: ProjectId,
    name: String,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Team {
    /// Create a new team.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty or too long
    pub fn new(
        id: TeamId,
        project_id: ProjectId,
        name: String,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        validate_name("name", &name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            project_id,
            name,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a team from persistence (no validation).
    pub fn reconstitute(
        id: TeamId,
        project_id: ProjectId,
        name: String,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            name,
            description,
            created_at,
            updated_at,
        }
    }

    /// Rename the team. Name and description are the only mutable fields.
    pub fn rename(&mut self, name: String, description: Option<String>) -> Result<(), DomainError> {
        validate_name("name", &name)?;
        self.name = name;
        self.description = description;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

/// A person on a team's roster.
///
/// Created once per person per team. The defaults seed new capacity rows
/// but each iteration keeps its own snapshot of the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: TeamMemberId,
    team_id: TeamId,
    display_name: String,
    role: Option<String>,
    default_work_mode: WorkMode,
    default_availability: Percentage,
    created_at: Timestamp,
}

impl TeamMember {
    /// Create a new member.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the display name is empty or too long
    pub fn new(
        id: TeamMemberId,
        team_id: TeamId,
        display_name: String,
        role: Option<String>,
        default_work_mode: WorkMode,
        default_availability: Percentage,
    ) -> Result<Self, DomainError> {
        validate_name("display_name", &display_name)?;

        Ok(Self {
            id,
            team_id,
            display_name,
            role,
            default_work_mode,
            default_availability,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a member from persistence (no validation).
    pub fn reconstitute(
        id: TeamMemberId,
        team_id: TeamId,
        display_name: String,
        role: Option<String>,
        default_work_mode: WorkMode,
        default_availability: Percentage,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            team_id,
            display_name,
            role,
            default_work_mode,
            default_availability,
            created_at,
        }
    }

    pub fn id(&self) -> &TeamMemberId {
        &self.id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn default_work_mode(&self) -> &WorkMode {
        &self.default_work_mode
    }

    pub fn default_availability(&self) -> Percentage {
        self.default_availability
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field).into());
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(
            field,
            format!("must be at most {} characters", MAX_NAME_LENGTH),
        ));
    }
    Ok(())
}
