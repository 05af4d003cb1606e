//! PostgreSQL implementation of TeamRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::capacity::WorkMode;
use crate::domain::foundation::{
    DomainError, ErrorCode, Percentage, ProjectId, TeamId, TeamMemberId, Timestamp,
};
use crate::domain::team::{Team, TeamMember};
use crate::ports::TeamRepository;

/// PostgreSQL implementation of TeamRepository.
#[derive(Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, project_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(team.id().as_uuid())
        .bind(team.project_id().as_uuid())
        .bind(team.name())
        .bind(team.description())
        .bind(team.created_at().as_datetime())
        .bind(team.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert team: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, name, description, created_at, updated_at
            FROM teams WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch team: {}", e))
        })?;

        row.map(row_to_team).transpose()
    }

    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check team existence: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }

    async fn add_member(&self, member: &TeamMember) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO team_members (
                id, team_id, display_name, role, work_mode, availability_percent, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member.team_id().as_uuid())
        .bind(member.display_name())
        .bind(member.role())
        .bind(member.default_work_mode().as_wire())
        .bind(member.default_availability().value() as i16)
        .bind(member.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert team member: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_member(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, team_id, display_name, role, work_mode, availability_percent, created_at
            FROM team_members WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch team member: {}", e),
            )
        })?;

        Ok(row.map(row_to_member))
    }

    async fn find_members_by_team(
        &self,
        team_id: &TeamId,
    ) -> Result<Vec<TeamMember>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, team_id, display_name, role, work_mode, availability_percent, created_at
            FROM team_members
            WHERE team_id = $1
            ORDER BY display_name ASC
            "#,
        )
        .bind(team_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch team members: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_member).collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper Functions
// ════════════════════════════════════════════════════════════════════════════════

fn row_to_team(row: sqlx::postgres::PgRow) -> Result<Team, DomainError> {
    let id: Uuid = row.get("id");
    let project_id: Uuid = row.get("project_id");
    let name: String = row.get("name");
    let description: Option<String> = row.get("description");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    Ok(Team::reconstitute(
        TeamId::from_uuid(id),
        ProjectId::from_uuid(project_id),
        name,
        description,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn row_to_member(row: sqlx::postgres::PgRow) -> TeamMember {
    let id: Uuid = row.get("id");
    let team_id: Uuid = row.get("team_id");
    let display_name: String = row.get("display_name");
    let role: Option<String> = row.get("role");
    let work_mode: String = row.get("work_mode");
    let availability_percent: i16 = row.get("availability_percent");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    TeamMember::reconstitute(
        TeamMemberId::from_uuid(id),
        TeamId::from_uuid(team_id),
        display_name,
        role,
        WorkMode::from_wire(&work_mode),
        Percentage::new(availability_percent.clamp(0, 100) as u8),
        Timestamp::from_datetime(created_at),
    )
}
