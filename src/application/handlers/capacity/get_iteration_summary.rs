//! GetIterationSummaryHandler - the reporting rollup.

use std::sync::Arc;

use crate::domain::capacity::{
    summarize, summarize_by_team, CapacityError, IterationCapacitySummary, TeamCapacitySummary,
};
use crate::domain::foundation::IterationId;
use crate::ports::{CapacityRepository, IterationRepository};

/// Query for an iteration's capacity rollup.
#[derive(Debug, Clone)]
pub struct GetIterationSummaryQuery {
    pub iteration_id: IterationId,
    /// Also group totals by team for iterations spanning sub-teams.
    pub by_team: bool,
}

/// The read-only summary shape exposed to reporting consumers.
#[derive(Debug, Clone)]
pub struct IterationSummaryView {
    pub summary: IterationCapacitySummary,
    pub teams: Option<Vec<TeamCapacitySummary>>,
}

/// Handler for the iteration rollup.
pub struct GetIterationSummaryHandler {
    iterations: Arc<dyn IterationRepository>,
    capacity: Arc<dyn CapacityRepository>,
}

impl GetIterationSummaryHandler {
    pub fn new(
        iterations: Arc<dyn IterationRepository>,
        capacity: Arc<dyn CapacityRepository>,
    ) -> Self {
        Self {
            iterations,
            capacity,
        }
    }

    pub async fn handle(
        &self,
        query: GetIterationSummaryQuery,
    ) -> Result<IterationSummaryView, CapacityError> {
        if self
            .iterations
            .find_by_id(&query.iteration_id)
            .await?
            .is_none()
        {
            return Err(CapacityError::IterationNotFound(query.iteration_id));
        }

        let members = self.capacity.find_by_iteration(&query.iteration_id).await?;
        let summary = summarize(query.iteration_id, &members);
        let teams = query.by_team.then(|| summarize_by_team(&members));

        Ok(IterationSummaryView { summary, teams })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{InMemoryCapacity, InMemoryIterations};
    use crate::domain::capacity::{CapacityMember, Iteration, ModeWeights, WorkMode};
    use crate::domain::foundation::{Percentage, ProjectId, TeamId, TeamMemberId};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn fixture() -> (GetIterationSummaryHandler, Arc<InMemoryCapacity>, IterationId, TeamId) {
        let team_id = TeamId::new();
        let iteration = Iteration::new(
            IterationId::new(),
            ProjectId::new(),
            team_id,
            "Sprint 1".to_string(),
            date(2024, 1, 1),
            date(2024, 1, 7),
            5,
        )
        .unwrap();
        let iteration_id = *iteration.id();
        let iterations = Arc::new(InMemoryIterations::with_iteration(iteration, vec![]));
        let capacity = Arc::new(InMemoryCapacity::new());
        let handler = GetIterationSummaryHandler::new(iterations, capacity.clone());
        (handler, capacity, iteration_id, team_id)
    }

    fn snapshot(iteration_id: IterationId, team_id: TeamId, availability: u8) -> CapacityMember {
        CapacityMember::compute(
            iteration_id,
            TeamMemberId::new(),
            team_id,
            dec!(0),
            Percentage::new(availability),
            WorkMode::Office,
            5,
            &ModeWeights::default(),
        )
    }

    #[tokio::test]
    async fn sums_capacity_across_members() {
        let (handler, capacity, iteration_id, team_id) = fixture().await;
        capacity
            .upsert(&snapshot(iteration_id, team_id, 100))
            .await
            .unwrap();
        capacity
            .upsert(&snapshot(iteration_id, team_id, 80))
            .await
            .unwrap();

        let view = handler
            .handle(GetIterationSummaryQuery {
                iteration_id,
                by_team: false,
            })
            .await
            .unwrap();

        assert_eq!(view.summary.total_members, 2);
        assert_eq!(view.summary.total_effective_capacity, dec!(9));
        assert!(view.teams.is_none());
    }

    #[tokio::test]
    async fn groups_by_team_on_request() {
        let (handler, capacity, iteration_id, team_id) = fixture().await;
        let other_team = TeamId::new();
        capacity
            .upsert(&snapshot(iteration_id, team_id, 100))
            .await
            .unwrap();
        capacity
            .upsert(&snapshot(iteration_id, other_team, 100))
            .await
            .unwrap();

        let view = handler
            .handle(GetIterationSummaryQuery {
                iteration_id,
                by_team: true,
            })
            .await
            .unwrap();

        let teams = view.teams.unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.total_members == 1));
    }

    #[tokio::test]
    async fn empty_iteration_has_zero_totals() {
        let (handler, _capacity, iteration_id, _team_id) = fixture().await;
        let view = handler
            .handle(GetIterationSummaryQuery {
                iteration_id,
                by_team: false,
            })
            .await
            .unwrap();
        assert_eq!(view.summary.total_members, 0);
    }

    #[tokio::test]
    async fn fails_for_unknown_iteration() {
        let (handler, _capacity, _iteration_id, _team_id) = fixture().await;
        let result = handler
            .handle(GetIterationSummaryQuery {
                iteration_id: IterationId::new(),
                by_team: false,
            })
            .await;
        assert!(matches!(result, Err(CapacityError::IterationNotFound(_))));
    }
}
