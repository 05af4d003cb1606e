//! HTTP adapter for capacity and availability endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CapacityAppState;
pub use routes::capacity_router;
