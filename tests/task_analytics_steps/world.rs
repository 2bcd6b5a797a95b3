//! Shared world state for task analytics BDD scenarios.

use chrono::{DateTime, NaiveDate, Utc};
use rstest::fixture;
use tasklens::analytics::domain::{ReferenceDay, Task, TaskId, TaskKind, TaskNumber, TaskState};

/// Owned digest of the statistics a scenario asserts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsDigest {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub overdue: Vec<u64>,
    pub missing_eta: usize,
    pub missing_eta_by_priority: (usize, usize, usize),
    pub unassigned: usize,
}

/// Scenario world for task analytics behaviour tests.
#[derive(Default)]
pub struct AnalyticsWorld {
    pub today: Option<NaiveDate>,
    pub tasks: Vec<Task>,
    pub last_stats: Option<StatsDigest>,
    pub assignee_groups: Vec<(String, Vec<u64>)>,
}

impl AnalyticsWorld {
    /// Returns the UTC reference day configured by the scenario.
    pub fn reference(&self) -> Result<ReferenceDay<Utc>, eyre::Report> {
        let today = self
            .today
            .ok_or_else(|| eyre::eyre!("scenario did not set today"))?;
        Ok(ReferenceDay::utc(noon(today)?))
    }

    /// Builds a task in `state`, created a week before today.
    pub fn new_task(&self, number: u64, state: TaskState) -> Result<Task, eyre::Report> {
        let today = self
            .today
            .ok_or_else(|| eyre::eyre!("scenario did not set today"))?;
        Ok(Task::new(
            TaskId::new(format!("PVTI_{number}")),
            TaskNumber::new(number),
            format!("Scenario task {number}"),
            TaskKind::Issue,
            state,
            noon(today)? - chrono::Duration::days(7),
        ))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AnalyticsWorld {
    AnalyticsWorld::default()
}

/// Parses an ISO calendar day.
pub fn parse_day(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| eyre::eyre!("bad day {raw}: {err}"))
}

/// Returns noon UTC on `day`.
pub fn noon(day: NaiveDate) -> Result<DateTime<Utc>, eyre::Report> {
    day.and_hms_opt(12, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| eyre::eyre!("invalid time of day"))
}
