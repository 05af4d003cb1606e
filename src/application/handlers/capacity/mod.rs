//! Handlers for capacity entry, attendance and rollups.

mod get_iteration_summary;
mod get_week_availability;
mod record_daily_attendance;
mod save_member_capacity;
mod set_week_override;

pub use get_iteration_summary::{
    GetIterationSummaryHandler, GetIterationSummaryQuery, IterationSummaryView,
};
pub use get_week_availability::{
    GetWeekAvailabilityHandler, GetWeekAvailabilityQuery, WeekAvailabilityView,
};
pub use record_daily_attendance::{
    RecordDailyAttendanceCommand, RecordDailyAttendanceHandler, RecordDailyAttendanceResult,
};
pub use save_member_capacity::{
    SaveMemberCapacityCommand, SaveMemberCapacityHandler, SaveMemberCapacityResult,
};
pub use set_week_override::{SetWeekOverrideCommand, SetWeekOverrideHandler, SetWeekOverrideResult};
