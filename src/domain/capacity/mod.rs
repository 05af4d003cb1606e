//! Capacity module - the computational core of the service.
//!
//! Four cooperating, stateless components over rows supplied by the
//! persistence layer:
//!
//! 1. Iteration week generation ([`weeks`])
//! 2. Effective capacity calculation ([`calculator`])
//! 3. Daily/weekly availability aggregation ([`availability`])
//! 4. Iteration capacity rollup ([`rollup`])
//!
//! Data flows one way: weeks -> availability -> effective capacity ->
//! rollup. Nothing here performs I/O or retains state between calls.

mod availability;
mod calculator;
mod errors;
mod iteration;
mod rollup;
mod weeks;
mod work_mode;

pub use availability::{
    AttendanceStatus, AvailabilityPercent, DailyAttendance, WeekAttendanceSummary,
    WeeklyAvailability, is_business_day, summarize_week,
};
pub use calculator::effective_capacity_days;
pub use errors::CapacityError;
pub use iteration::{Iteration, MAX_ITERATION_NAME_LENGTH};
pub use rollup::{summarize, summarize_by_team, CapacityMember, IterationCapacitySummary, TeamCapacitySummary};
pub use weeks::{generate_weeks, span_days, IterationWeek, WeekSpan};
pub use work_mode::{ModeWeights, WorkMode};
