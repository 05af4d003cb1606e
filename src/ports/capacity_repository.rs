//! Capacity snapshot repository port.

use crate::domain::capacity::CapacityMember;
use crate::domain::foundation::{DomainError, IterationId, TeamMemberId};
use async_trait::async_trait;

/// Repository port for iteration-scoped capacity snapshots.
///
/// Upserts are keyed by (iteration, member). The snapshot carries its
/// derived `effective_capacity_days`, so writing the row is what makes
/// the recomputation atomic with the triggering update: there is no
/// second statement that could leave the derived value stale.
#[async_trait]
pub trait CapacityRepository: Send + Sync {
    /// Insert or update a member's capacity snapshot.
    ///
    /// Re-submitting an identical snapshot is a no-op for readers.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, member: &CapacityMember) -> Result<(), DomainError>;

    /// Find one snapshot. Returns `None` if the member has no capacity
    /// row in this iteration yet.
    async fn find_one(
        &self,
        iteration_id: &IterationId,
        member_id: &TeamMemberId,
    ) -> Result<Option<CapacityMember>, DomainError>;

    /// All snapshots for an iteration, ordered by member ID.
    async fn find_by_iteration(
        &self,
        iteration_id: &IterationId,
    ) -> Result<Vec<CapacityMember>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CapacityRepository) {}
    }
}
