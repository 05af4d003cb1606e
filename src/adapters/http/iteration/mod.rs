//! HTTP adapter for iteration endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::IterationAppState;
pub use routes::iteration_router;
