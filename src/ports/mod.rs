//! Ports - contracts between the application layer and infrastructure.
//!
//! Each port is an object-safe async trait. Postgres implementations live
//! in `adapters::postgres`; tests substitute in-memory mocks.

mod availability_repository;
mod capacity_repository;
mod iteration_repository;
mod team_repository;

pub use availability_repository::AvailabilityRepository;
pub use capacity_repository::CapacityRepository;
pub use iteration_repository::IterationRepository;
pub use team_repository::TeamRepository;
