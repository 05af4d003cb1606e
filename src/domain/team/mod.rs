//! Team module - rosters of members that capacity rows reference.

mod aggregate;
mod errors;

pub use aggregate::{Team, TeamMember, MAX_NAME_LENGTH};
pub use errors::TeamError;
