//! Iteration repository port.

use crate::domain::capacity::{Iteration, IterationWeek};
use crate::domain::foundation::{DomainError, IterationId, IterationWeekId};
use async_trait::async_trait;

/// Repository port for iterations and their generated weeks.
///
/// An iteration owns its weeks: they are written together and the cascade
/// removes them together.
#[async_trait]
pub trait IterationRepository: Send + Sync {
    /// Save a new iteration together with its week sequence, atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn save_with_weeks(
        &self,
        iteration: &Iteration,
        weeks: &[IterationWeek],
    ) -> Result<(), DomainError>;

    /// Find an iteration by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &IterationId) -> Result<Option<Iteration>, DomainError>;

    /// The iteration's weeks, ordered by index.
    async fn find_weeks(&self, iteration_id: &IterationId)
        -> Result<Vec<IterationWeek>, DomainError>;

    /// Find a single week by its ID. Returns `None` if not found.
    async fn find_week(&self, id: &IterationWeekId)
        -> Result<Option<IterationWeek>, DomainError>;
}
