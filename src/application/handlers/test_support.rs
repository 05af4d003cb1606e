//! Shared in-memory port implementations for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::capacity::{
    CapacityMember, DailyAttendance, Iteration, IterationWeek, WeeklyAvailability,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, IterationId, IterationWeekId, TeamId, TeamMemberId,
};
use crate::domain::team::{Team, TeamMember};
use crate::ports::{
    AvailabilityRepository, CapacityRepository, IterationRepository, TeamRepository,
};

// ════════════════════════════════════════════════════════════════════════════
// Teams
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InMemoryTeams {
    pub teams: Mutex<Vec<Team>>,
    pub members: Mutex<Vec<TeamMember>>,
}

impl InMemoryTeams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(member: TeamMember) -> Self {
        let repo = Self::new();
        repo.members.lock().unwrap().push(member);
        repo
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeams {
    async fn save(&self, team: &Team) -> Result<(), DomainError> {
        self.teams.lock().unwrap().push(team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.teams.lock().unwrap().iter().any(|t| t.id() == id))
    }

    async fn add_member(&self, member: &TeamMember) -> Result<(), DomainError> {
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn find_member(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn find_members_by_team(
        &self,
        team_id: &TeamId,
    ) -> Result<Vec<TeamMember>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.team_id() == team_id)
            .cloned()
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Iterations
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InMemoryIterations {
    pub iterations: Mutex<Vec<Iteration>>,
    pub weeks: Mutex<Vec<IterationWeek>>,
    pub fail_save: bool,
}

impl InMemoryIterations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub fn with_iteration(iteration: Iteration, weeks: Vec<IterationWeek>) -> Self {
        let repo = Self::new();
        repo.iterations.lock().unwrap().push(iteration);
        repo.weeks.lock().unwrap().extend(weeks);
        repo
    }
}

#[async_trait]
impl IterationRepository for InMemoryIterations {
    async fn save_with_weeks(
        &self,
        iteration: &Iteration,
        weeks: &[IterationWeek],
    ) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated save failure",
            ));
        }
        self.iterations.lock().unwrap().push(iteration.clone());
        self.weeks.lock().unwrap().extend_from_slice(weeks);
        Ok(())
    }

    async fn find_by_id(&self, id: &IterationId) -> Result<Option<Iteration>, DomainError> {
        Ok(self
            .iterations
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id)
            .cloned())
    }

    async fn find_weeks(
        &self,
        iteration_id: &IterationId,
    ) -> Result<Vec<IterationWeek>, DomainError> {
        let mut weeks: Vec<IterationWeek> = self
            .weeks
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.iteration_id() == iteration_id)
            .cloned()
            .collect();
        weeks.sort_by_key(IterationWeek::index);
        Ok(weeks)
    }

    async fn find_week(
        &self,
        id: &IterationWeekId,
    ) -> Result<Option<IterationWeek>, DomainError> {
        Ok(self
            .weeks
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id() == id)
            .cloned())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Availability
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InMemoryAvailability {
    pub weekly: Mutex<Vec<WeeklyAvailability>>,
    pub attendance: Mutex<HashMap<(IterationWeekId, TeamMemberId), Vec<DailyAttendance>>>,
}

impl InMemoryAvailability {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailability {
    async fn find_weekly(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Option<WeeklyAvailability>, DomainError> {
        Ok(self
            .weekly
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.week_id() == week_id && w.member_id() == member_id)
            .cloned())
    }

    async fn find_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
    ) -> Result<Vec<DailyAttendance>, DomainError> {
        let mut days = self
            .attendance
            .lock()
            .unwrap()
            .get(&(*week_id, *member_id))
            .cloned()
            .unwrap_or_default();
        days.sort_by_key(|d| d.date);
        Ok(days)
    }

    async fn save_attendance(
        &self,
        week_id: &IterationWeekId,
        member_id: &TeamMemberId,
        days: &[DailyAttendance],
        weekly: &WeeklyAvailability,
    ) -> Result<(), DomainError> {
        {
            let mut map = self.attendance.lock().unwrap();
            let stored = map.entry((*week_id, *member_id)).or_default();
            for day in days {
                match stored.iter_mut().find(|d| d.date == day.date) {
                    Some(existing) => *existing = *day,
                    None => stored.push(*day),
                }
            }
        }
        self.upsert_weekly(weekly).await
    }

    async fn upsert_weekly(&self, weekly: &WeeklyAvailability) -> Result<(), DomainError> {
        let mut rows = self.weekly.lock().unwrap();
        match rows
            .iter_mut()
            .find(|w| w.week_id() == weekly.week_id() && w.member_id() == weekly.member_id())
        {
            Some(existing) => *existing = weekly.clone(),
            None => rows.push(weekly.clone()),
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Capacity snapshots
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InMemoryCapacity {
    pub rows: Mutex<Vec<CapacityMember>>,
}

impl InMemoryCapacity {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CapacityRepository for InMemoryCapacity {
    async fn upsert(&self, member: &CapacityMember) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| {
            r.iteration_id() == member.iteration_id() && r.member_id() == member.member_id()
        }) {
            Some(existing) => *existing = member.clone(),
            None => rows.push(member.clone()),
        }
        Ok(())
    }

    async fn find_one(
        &self,
        iteration_id: &IterationId,
        member_id: &TeamMemberId,
    ) -> Result<Option<CapacityMember>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.iteration_id() == iteration_id && r.member_id() == member_id)
            .cloned())
    }

    async fn find_by_iteration(
        &self,
        iteration_id: &IterationId,
    ) -> Result<Vec<CapacityMember>, DomainError> {
        let mut rows: Vec<CapacityMember> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.iteration_id() == iteration_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| *r.member_id().as_uuid());
        Ok(rows)
    }
}
