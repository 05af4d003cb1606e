//! Team repository port.
//!
//! Defines the contract for persisting teams and their member rosters.

use crate::domain::foundation::{DomainError, TeamId, TeamMemberId};
use crate::domain::team::{Team, TeamMember};
use async_trait::async_trait;

/// Repository port for teams and members.
///
/// Implementations must enforce the cascade: deleting a team removes its
/// members and iterations.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a new team.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, team: &Team) -> Result<(), DomainError>;

    /// Find a team by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Check if a team exists.
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// Add a member to a team's roster.
    ///
    /// # Errors
    ///
    /// - `TeamNotFound` if the team doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add_member(&self, member: &TeamMember) -> Result<(), DomainError>;

    /// Find a member by ID. Returns `None` if not found.
    async fn find_member(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// List a team's roster, ordered by display name.
    async fn find_members_by_team(&self, team_id: &TeamId)
        -> Result<Vec<TeamMember>, DomainError>;
}
