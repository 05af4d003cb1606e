//! PostgreSQL implementation of IterationRepository.
//!
//! The iteration row and its week rows are written in one transaction so
//! a reader never observes an iteration without its weeks.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::capacity::{Iteration, IterationWeek};
use crate::domain::foundation::{
    DomainError, ErrorCode, IterationId, IterationWeekId, ProjectId, TeamId, Timestamp,
};
use crate::ports::IterationRepository;

/// PostgreSQL implementation of IterationRepository.
#[derive(Clone)]
pub struct PostgresIterationRepository {
    pool: PgPool,
}

impl PostgresIterationRepository {
    /// Creates a new PostgresIterationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IterationRepository for PostgresIterationRepository {
    async fn save_with_weeks(
        &self,
        iteration: &Iteration,
        weeks: &[IterationWeek],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO iterations (
                id, project_id, team_id, name, start_date, end_date,
                working_days, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(iteration.id().as_uuid())
        .bind(iteration.project_id().as_uuid())
        .bind(iteration.team_id().as_uuid())
        .bind(iteration.name())
        .bind(iteration.start_date())
        .bind(iteration.end_date())
        .bind(iteration.working_days() as i32)
        .bind(iteration.created_at().as_datetime())
        .bind(iteration.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert iteration: {}", e),
            )
        })?;

        for week in weeks {
            sqlx::query(
                r#"
                INSERT INTO iteration_weeks (id, iteration_id, week_index, week_start, week_end)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(week.id().as_uuid())
            .bind(week.iteration_id().as_uuid())
            .bind(week.index() as i32)
            .bind(week.week_start())
            .bind(week.week_end())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert iteration week: {}", e),
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &IterationId) -> Result<Option<Iteration>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, team_id, name, start_date, end_date,
                   working_days, created_at, updated_at
            FROM iterations WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch iteration: {}", e),
            )
        })?;

        Ok(row.map(row_to_iteration))
    }

    async fn find_weeks(
        &self,
        iteration_id: &IterationId,
    ) -> Result<Vec<IterationWeek>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, iteration_id, week_index, week_start, week_end
            FROM iteration_weeks
            WHERE iteration_id = $1
            ORDER BY week_index ASC
            "#,
        )
        .bind(iteration_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch iteration weeks: {}", e),
            )
        })?;

        Ok(rows.into_iter().map(row_to_week).collect())
    }

    async fn find_week(
        &self,
        id: &IterationWeekId,
    ) -> Result<Option<IterationWeek>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, iteration_id, week_index, week_start, week_end
            FROM iteration_weeks WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch iteration week: {}", e),
            )
        })?;

        Ok(row.map(row_to_week))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper Functions
// ════════════════════════════════════════════════════════════════════════════════

fn row_to_iteration(row: sqlx::postgres::PgRow) -> Iteration {
    let id: Uuid = row.get("id");
    let project_id: Uuid = row.get("project_id");
    let team_id: Uuid = row.get("team_id");
    let name: String = row.get("name");
    let start_date: chrono::NaiveDate = row.get("start_date");
    let end_date: chrono::NaiveDate = row.get("end_date");
    let working_days: i32 = row.get("working_days");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    Iteration::reconstitute(
        IterationId::from_uuid(id),
        ProjectId::from_uuid(project_id),
        TeamId::from_uuid(team_id),
        name,
        start_date,
        end_date,
        working_days.max(0) as u32,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    )
}

fn row_to_week(row: sqlx::postgres::PgRow) -> IterationWeek {
    let id: Uuid = row.get("id");
    let iteration_id: Uuid = row.get("iteration_id");
    let week_index: i32 = row.get("week_index");
    let week_start: chrono::NaiveDate = row.get("week_start");
    let week_end: chrono::NaiveDate = row.get("week_end");

    IterationWeek::reconstitute(
        IterationWeekId::from_uuid(id),
        IterationId::from_uuid(iteration_id),
        week_index.max(0) as u32,
        week_start,
        week_end,
    )
}
