//! Handlers for team roster operations.

mod add_member;
mod create_team;
mod list_members;

pub use add_member::{AddMemberCommand, AddMemberHandler, AddMemberResult};
pub use create_team::{CreateTeamCommand, CreateTeamHandler, CreateTeamResult};
pub use list_members::{ListMembersHandler, ListMembersQuery};
