//! PostgreSQL implementation of AvailabilityRepository.
//!
//! The weekly cell stores the calculated percent and the override in
//! separate columns; the override column is NULL when no override is set.
//! `save_attendance` writes the day rows and the weekly cell in one
//! transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::capacity::{
    AttendanceStatus, AvailabilityPercent, DailyAttendance, WeeklyAvailability,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, IterationWeekId, Percentage, TeamMemberId, Timestamp,
};
use crate::ports::AvailabilityRepository;

/// PostgreSQL implementation of AvailabilityRepository.
#[derive(Clone)]
pub struct PostgresAvailabilityRepository {
    pool: PgPool,
}

impl PostgresAvailabilityRepository {
    /// Creates a new PostgresAvailabilityRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn find_weekly(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Option<WeeklyAvailability>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT iteration_week_id, member_id, calculated_percent, override_percent,
                   days_present, days_total, updated_at
            FROM weekly_availability
            WHERE iteration_week_id = $1 AND member_id = $2
            "#,
        )
        .bind(week_id.as_uuid())
        .bind(member_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch weekly availability: {}", e),
            )
        })?;

        Ok(row.map(row_to_weekly))
    }

    async fn find_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Vec<DailyAttendance>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT attendance_date, status
            FROM daily_attendance
            WHERE iteration_week_id = $1 AND member_id = $2
            ORDER BY attendance_date ASC
            "#,
        )
        .bind(week_id.as_uuid())
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch daily attendance: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_day).collect()
    }

    async fn save_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
        days: &[DailyAttendance],
        weekly: &WeeklyAvailability,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        for day in days {
            sqlx::query(
                r#"
                INSERT INTO daily_attendance (iteration_week_id, member_id, attendance_date, status)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (iteration_week_id, member_id, attendance_date)
                DO UPDATE SET status = EXCLUDED.status
                "#,
            )
            .bind(week_id.as_uuid())
            .bind(member_id.as_uuid())
            .bind(day.date)
            .bind(status_to_str(day.status))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to upsert daily attendance: {}", e),
                )
            })?;
        }

        upsert_weekly_in(&mut tx, weekly).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Ok(())
    }

    async fn upsert_weekly(&self, weekly: &WeeklyAvailability) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        upsert_weekly_in(&mut tx, weekly).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper Functions
// ════════════════════════════════════════════════════════════════════════════════

async fn upsert_weekly_in(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    weekly: &WeeklyAvailability,
) -> Result<(), DomainError> {
    let override_percent: Option<i16> = match weekly.percent() {
        AvailabilityPercent::Calculated(_) => None,
        AvailabilityPercent::Overridden { value, .. } => Some(value.value() as i16),
    };

    sqlx::query(
        r#"
        INSERT INTO weekly_availability (
            iteration_week_id, member_id, calculated_percent, override_percent,
            days_present, days_total, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (iteration_week_id, member_id)
        DO UPDATE SET
            calculated_percent = EXCLUDED.calculated_percent,
            override_percent = EXCLUDED.override_percent,
            days_present = EXCLUDED.days_present,
            days_total = EXCLUDED.days_total,
            updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(weekly.week_id().as_uuid())
    .bind(weekly.member_id().as_uuid())
    .bind(weekly.percent().calculated().value() as i16)
    .bind(override_percent)
    .bind(weekly.days_present() as i16)
    .bind(weekly.days_total() as i16)
    .bind(weekly.updated_at().as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to upsert weekly availability: {}", e),
        )
    })?;

    Ok(())
}

fn row_to_weekly(row: sqlx::postgres::PgRow) -> WeeklyAvailability {
    let week_id: Uuid = row.get("iteration_week_id");
    let member_id: Uuid = row.get("member_id");
    let calculated_percent: i16 = row.get("calculated_percent");
    let override_percent: Option<i16> = row.get("override_percent");
    let days_present: i16 = row.get("days_present");
    let days_total: i16 = row.get("days_total");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let calculated = Percentage::new(calculated_percent.clamp(0, 100) as u8);
    let percent = match override_percent {
        Some(value) => AvailabilityPercent::Overridden {
            value: Percentage::new(value.clamp(0, 100) as u8),
            calculated,
        },
        None => AvailabilityPercent::Calculated(calculated),
    };

    WeeklyAvailability::reconstitute(
        IterationWeekId::from_uuid(week_id),
        TeamMemberId::from_uuid(member_id),
        percent,
        days_present.clamp(0, 7) as u8,
        days_total.clamp(0, 7) as u8,
        Timestamp::from_datetime(updated_at),
    )
}

fn row_to_day(row: sqlx::postgres::PgRow) -> Result<DailyAttendance, DomainError> {
    let date: chrono::NaiveDate = row.get("attendance_date");
    let status: String = row.get("status");
    Ok(DailyAttendance::new(date, str_to_status(&status)?))
}

// ════════════════════════════════════════════════════════════════════════════════
// Type Conversions
// ════════════════════════════════════════════════════════════════════════════════

fn status_to_str(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "present",
        AttendanceStatus::Absent => "absent",
    }
}

fn str_to_status(s: &str) -> Result<AttendanceStatus, DomainError> {
    match s {
        "present" => Ok(AttendanceStatus::Present),
        "absent" => Ok(AttendanceStatus::Absent),
        _ => Err(DomainError::new(
            ErrorCode::InternalError,
            format!("Invalid attendance status: {}", s),
        )),
    }
}
