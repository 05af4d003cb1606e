//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod capacity;
pub mod error;
pub mod iteration;
pub mod team;

// Re-export key types for convenience
pub use capacity::{capacity_router, CapacityAppState};
pub use error::{ApiError, ErrorResponse};
pub use iteration::{iteration_router, IterationAppState};
pub use team::{team_router, TeamAppState};
