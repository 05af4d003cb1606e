//! SaveMemberCapacityHandler - upserts a member's capacity inputs.
//!
//! The derived `effective_capacity_days` is computed when the snapshot is
//! built and written together with its inputs, so the stored value is
//! always a pure function of the other columns at write time.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::capacity::{CapacityError, CapacityMember, ModeWeights, WorkMode};
use crate::domain::foundation::{IterationId, Percentage, TeamMemberId};
use crate::ports::{CapacityRepository, IterationRepository, TeamRepository};

/// Command to record a member's capacity inputs for an iteration.
#[derive(Debug, Clone)]
pub struct SaveMemberCapacityCommand {
    pub iteration_id: IterationId,
    pub member_id: TeamMemberId,
    pub leaves: Decimal,
    pub availability: Percentage,
    pub work_mode: WorkMode,
}

/// Result of a capacity upsert.
#[derive(Debug, Clone)]
pub struct SaveMemberCapacityResult {
    pub snapshot: CapacityMember,
}

/// Handler for member capacity entry.
pub struct SaveMemberCapacityHandler {
    iterations: Arc<dyn IterationRepository>,
    teams: Arc<dyn TeamRepository>,
    capacity: Arc<dyn CapacityRepository>,
    weights: ModeWeights,
}

impl SaveMemberCapacityHandler {
    pub fn new(
        iterations: Arc<dyn IterationRepository>,
        teams: Arc<dyn TeamRepository>,
        capacity: Arc<dyn CapacityRepository>,
        weights: ModeWeights,
    ) -> Self {
        Self {
            iterations,
            teams,
            capacity,
            weights,
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveMemberCapacityCommand,
    ) -> Result<SaveMemberCapacityResult, CapacityError> {
        if cmd.leaves < Decimal::ZERO {
            return Err(CapacityError::validation(
                "leaves",
                "must not be negative",
            ));
        }

        let iteration = self
            .iterations
            .find_by_id(&cmd.iteration_id)
            .await?
            .ok_or(CapacityError::IterationNotFound(cmd.iteration_id))?;
        let member = self
            .teams
            .find_member(&cmd.member_id)
            .await?
            .ok_or(CapacityError::MemberNotFound(cmd.member_id))?;

        let snapshot = CapacityMember::compute(
            cmd.iteration_id,
            cmd.member_id,
            *member.team_id(),
            cmd.leaves,
            cmd.availability,
            cmd.work_mode,
            iteration.working_days(),
            &self.weights,
        );
        self.capacity.upsert(&snapshot).await?;

        tracing::info!(
            iteration_id = %cmd.iteration_id,
            member_id = %cmd.member_id,
            effective = %snapshot.effective_capacity_days(),
            "capacity saved"
        );
        Ok(SaveMemberCapacityResult { snapshot })
    }
}
