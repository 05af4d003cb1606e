//! PostgreSQL adapters - Database implementations of the repository ports.
//!
//! - `PostgresTeamRepository` - teams and member rosters
//! - `PostgresIterationRepository` - iterations and their generated weeks
//! - `PostgresAvailabilityRepository` - daily attendance and weekly cells
//! - `PostgresCapacityRepository` - per-member capacity snapshots

mod availability_repository;
mod capacity_repository;
mod iteration_repository;
mod team_repository;

pub use availability_repository::PostgresAvailabilityRepository;
pub use capacity_repository::PostgresCapacityRepository;
pub use iteration_repository::PostgresIterationRepository;
pub use team_repository::PostgresTeamRepository;
