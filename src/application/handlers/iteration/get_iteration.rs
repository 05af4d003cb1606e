//! GetIterationHandler - Query handler for an iteration and its weeks.

use std::sync::Arc;

use crate::domain::capacity::{CapacityError, Iteration, IterationWeek};
use crate::domain::foundation::IterationId;
use crate::ports::IterationRepository;

/// Query for one iteration.
#[derive(Debug, Clone)]
pub struct GetIterationQuery {
    pub iteration_id: IterationId,
}

/// An iteration together with its week sequence.
#[derive(Debug, Clone)]
pub struct IterationView {
    pub iteration: Iteration,
    pub weeks: Vec<IterationWeek>,
}

/// Handler for reading iterations.
pub struct GetIterationHandler {
    iterations: Arc<dyn IterationRepository>,
}

impl GetIterationHandler {
    pub fn new(iterations: Arc<dyn IterationRepository>) -> Self {
        Self { iterations }
    }

    pub async fn handle(&self, query: GetIterationQuery) -> Result<IterationView, CapacityError> {
        let iteration = self
            .iterations
            .find_by_id(&query.iteration_id)
            .await?
            .ok_or(CapacityError::IterationNotFound(query.iteration_id))?;
        let weeks = self.iterations.find_weeks(&query.iteration_id).await?;

        Ok(IterationView { iteration, weeks })
    }
}
