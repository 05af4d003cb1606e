//! HTTP adapter for team endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TeamAppState;
pub use routes::team_router;
