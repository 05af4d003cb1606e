//! Route configuration for iteration endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_iteration, get_iteration, IterationAppState};

/// Creates the iteration router with all endpoints.
///
/// Routes:
/// - `POST /api/iterations` - Create an iteration (weeks are generated)
/// - `GET /api/iterations/:id` - Read an iteration and its weeks
pub fn iteration_router() -> Router<IterationAppState> {
    Router::new()
        .route("/api/iterations", post(create_iteration))
        .route("/api/iterations/:id", get(get_iteration))
}
