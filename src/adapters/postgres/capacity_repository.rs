//! PostgreSQL implementation of CapacityRepository.
//!
//! The snapshot row carries its derived `effective_capacity_days`, so an
//! upsert replaces the inputs and the derived value in one statement.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::capacity::{CapacityMember, WorkMode};
use crate::domain::foundation::{
    DomainError, ErrorCode, IterationId, Percentage, TeamId, TeamMemberId, Timestamp,
};
use crate::ports::CapacityRepository;

/// PostgreSQL implementation of CapacityRepository.
#[derive(Clone)]
pub struct PostgresCapacityRepository {
    pool: PgPool,
}

impl PostgresCapacityRepository {
    /// Creates a new PostgresCapacityRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CapacityRepository for PostgresCapacityRepository {
    async fn upsert(&self, member: &CapacityMember) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO capacity_members (
                iteration_id, member_id, team_id, leaves, availability_percent,
                work_mode, effective_capacity_days, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (iteration_id, member_id)
            DO UPDATE SET
                team_id = EXCLUDED.team_id,
                leaves = EXCLUDED.leaves,
                availability_percent = EXCLUDED.availability_percent,
                work_mode = EXCLUDED.work_mode,
                effective_capacity_days = EXCLUDED.effective_capacity_days,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(member.iteration_id().as_uuid())
        .bind(member.member_id().as_uuid())
        .bind(member.team_id().as_uuid())
        .bind(member.leaves())
        .bind(member.availability().value() as i16)
        .bind(member.work_mode().as_wire())
        .bind(member.effective_capacity_days())
        .bind(member.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert capacity snapshot: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_one(
        &self,
        iteration_id: &IterationId,
        member_id: &TeamMemberId,
    ) -> Result<Option<CapacityMember>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT iteration_id, member_id, team_id, leaves, availability_percent,
                   work_mode, effective_capacity_days, updated_at
            FROM capacity_members
            WHERE iteration_id = $1 AND member_id = $2
            "#,
        )
        .bind(iteration_id.as_uuid())
        .bind(member_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch capacity snapshot: {}", e),
            )
        })?;

        Ok(row.map(row_to_snapshot))
    }

    async fn find_by_iteration(
        &self,
        iteration_id: &IterationId,
    ) -> Result<Vec<CapacityMember>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT iteration_id, member_id, team_id, leaves, availability_percent,
                   work_mode, effective_capacity_days, updated_at
            FROM capacity_members
            WHERE iteration_id = $1
            ORDER BY member_id ASC
            "#,
        )
        .bind(iteration_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch capacity snapshots: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_snapshot).collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper Functions
// ════════════════════════════════════════════════════════════════════════════════

fn row_to_snapshot(row: sqlx::postgres::PgRow) -> CapacityMember {
    let iteration_id: Uuid = row.get("iteration_id");
    let member_id: Uuid = row.get("member_id");
    let team_id: Uuid = row.get("team_id");
    let leaves: Decimal = row.get("leaves");
    let availability_percent: i16 = row.get("availability_percent");
    let work_mode: String = row.get("work_mode");
    let effective_capacity_days: Decimal = row.get("effective_capacity_days");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    CapacityMember::reconstitute(
        IterationId::from_uuid(iteration_id),
        TeamMemberId::from_uuid(member_id),
        TeamId::from_uuid(team_id),
        leaves,
        Percentage::new(availability_percent.clamp(0, 100) as u8),
        WorkMode::from_wire(&work_mode),
        effective_capacity_days,
        Timestamp::from_datetime(updated_at),
    )
}
