//! Iteration capacity rollup.
//!
//! The original system recomputed `effective_capacity_days` as a database
//! trigger on row write. Here the recomputation is explicit application
//! code: [`CapacityMember`] computes the derived value at construction, so
//! a row can never be built with a stale snapshot, and the adapter writes
//! the whole row in one statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::effective_capacity_days;
use super::work_mode::{ModeWeights, WorkMode};
use crate::domain::foundation::{IterationId, Percentage, TeamId, TeamMemberId, Timestamp};

/// Iteration-scoped snapshot of one member's capacity inputs and the
/// derived effective capacity. Unique per (iteration, member).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityMember {
    iteration_id: IterationId,
    member_id: TeamMemberId,
    team_id: TeamId,
    leaves: Decimal,
    availability: Percentage,
    work_mode: WorkMode,
    effective_capacity_days: Decimal,
    updated_at: Timestamp,
}

impl CapacityMember {
    /// Builds a snapshot, computing `effective_capacity_days` from the
    /// inputs. There is no way to construct or mutate a snapshot without
    /// the derived value being recomputed.
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        iteration_id: IterationId,
        member_id: TeamMemberId,
        team_id: TeamId,
        leaves: Decimal,
        availability: Percentage,
        work_mode: WorkMode,
        working_days: u32,
        weights: &ModeWeights,
    ) -> Self {
        let effective =
            effective_capacity_days(working_days, leaves, availability, &work_mode, weights);
        Self {
            iteration_id,
            member_id,
            team_id,
            leaves,
            availability,
            work_mode,
            effective_capacity_days: effective,
            updated_at: Timestamp::now(),
        }
    }

    /// Reconstitute a snapshot from persistence with its stored derived
    /// value.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        iteration_id: IterationId,
        member_id: TeamMemberId,
        team_id: TeamId,
        leaves: Decimal,
        availability: Percentage,
        work_mode: WorkMode,
        effective_capacity_days: Decimal,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            iteration_id,
            member_id,
            team_id,
            leaves,
            availability,
            work_mode,
            effective_capacity_days,
            updated_at,
        }
    }

    pub fn iteration_id(&self) -> &IterationId {
        &self.iteration_id
    }

    pub fn member_id(&self) -> &TeamMemberId {
        &self.member_id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn leaves(&self) -> Decimal {
        self.leaves
    }

    pub fn availability(&self) -> Percentage {
        self.availability
    }

    pub fn work_mode(&self) -> &WorkMode {
        &self.work_mode
    }

    pub fn effective_capacity_days(&self) -> Decimal {
        self.effective_capacity_days
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

/// Read-only iteration-level rollup for reporting consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationCapacitySummary {
    pub iteration_id: IterationId,
    pub total_effective_capacity: Decimal,
    pub total_members: u32,
}

/// Team-level rollup for iterations spanning sub-teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCapacitySummary {
    pub team_id: TeamId,
    pub total_effective_capacity: Decimal,
    pub total_members: u32,
}

/// Aggregates per-member capacity into the iteration-level summary.
pub fn summarize(iteration_id: IterationId, members: &[CapacityMember]) -> IterationCapacitySummary {
    IterationCapacitySummary {
        iteration_id,
        total_effective_capacity: members.iter().map(|m| m.effective_capacity_days).sum(),
        total_members: members.len() as u32,
    }
}

/// Groups per-member capacity by team. Output is sorted by team ID so
/// repeated reads produce the same ordering.
pub fn summarize_by_team(members: &[CapacityMember]) -> Vec<TeamCapacitySummary> {
    let mut groups: Vec<TeamCapacitySummary> = Vec::new();
    for member in members {
        match groups.iter_mut().find(|g| g.team_id == member.team_id) {
            Some(group) => {
                group.total_effective_capacity += member.effective_capacity_days;
                group.total_members += 1;
            }
            None => groups.push(TeamCapacitySummary {
                team_id: member.team_id,
                total_effective_capacity: member.effective_capacity_days,
                total_members: 1,
            }),
        }
    }
    groups.sort_by_key(|g| *g.team_id.as_uuid());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(
        iteration_id: IterationId,
        team_id: TeamId,
        leaves: Decimal,
        availability: u8,
        mode: WorkMode,
    ) -> CapacityMember {
        CapacityMember::compute(
            iteration_id,
            TeamMemberId::new(),
            team_id,
            leaves,
            Percentage::new(availability),
            mode,
            5,
            &ModeWeights::default(),
        )
    }

    #[test]
    fn compute_derives_effective_capacity() {
        let member = snapshot(
            IterationId::new(),
            TeamId::new(),
            dec!(1),
            80,
            WorkMode::Hybrid,
        );
        assert_eq!(member.effective_capacity_days(), dec!(3.04));
    }

    #[test]
    fn summarize_totals_members_and_capacity() {
        let iteration_id = IterationId::new();
        let team_id = TeamId::new();
        let members = vec![
            snapshot(iteration_id, team_id, dec!(1), 80, WorkMode::Hybrid),
            snapshot(iteration_id, team_id, dec!(0), 100, WorkMode::Office),
        ];

        let summary = summarize(iteration_id, &members);
        assert_eq!(summary.total_members, 2);
        // 3.04 + 5.00
        assert_eq!(summary.total_effective_capacity, dec!(8.04));
    }

    #[test]
    fn summarize_empty_iteration_is_zero() {
        let summary = summarize(IterationId::new(), &[]);
        assert_eq!(summary.total_members, 0);
        assert_eq!(summary.total_effective_capacity, Decimal::ZERO);
    }

    #[test]
    fn summarize_by_team_groups_and_sorts() {
        let iteration_id = IterationId::new();
        let team_a = TeamId::new();
        let team_b = TeamId::new();
        let members = vec![
            snapshot(iteration_id, team_a, dec!(0), 100, WorkMode::Office),
            snapshot(iteration_id, team_b, dec!(0), 100, WorkMode::Office),
            snapshot(iteration_id, team_a, dec!(0), 100, WorkMode::Office),
        ];

        let groups = summarize_by_team(&members);
        assert_eq!(groups.len(), 2);
        let a = groups.iter().find(|g| g.team_id == team_a).unwrap();
        assert_eq!(a.total_members, 2);
        assert_eq!(a.total_effective_capacity, dec!(10));

        let sorted: Vec<_> = {
            let mut ids: Vec<_> = groups.iter().map(|g| *g.team_id.as_uuid()).collect();
            ids.sort();
            ids
        };
        assert_eq!(
            groups.iter().map(|g| *g.team_id.as_uuid()).collect::<Vec<_>>(),
            sorted
        );
    }

    #[test]
    fn negative_member_capacity_flows_into_totals_unclamped() {
        let iteration_id = IterationId::new();
        let team_id = TeamId::new();
        let members = vec![snapshot(iteration_id, team_id, dec!(7), 100, WorkMode::Office)];
        let summary = summarize(iteration_id, &members);
        assert_eq!(summary.total_effective_capacity, dec!(-2));
    }
}
