//! Handlers for iteration operations.

mod create_iteration;
mod get_iteration;

pub use create_iteration::{CreateIterationCommand, CreateIterationHandler, CreateIterationResult};
pub use get_iteration::{GetIterationHandler, GetIterationQuery, IterationView};
