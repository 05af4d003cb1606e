//! Route configuration for team endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{add_member, create_team, list_members, TeamAppState};

/// Creates the team router with all endpoints.
///
/// Routes:
/// - `POST /api/teams` - Create a team
/// - `POST /api/teams/:team_id/members` - Add a roster member
/// - `GET /api/teams/:team_id/members` - List the roster
pub fn team_router() -> Router<TeamAppState> {
    Router::new()
        .route("/api/teams", post(create_team))
        .route(
            "/api/teams/:team_id/members",
            post(add_member).get(list_members),
        )
}
