//! Shared builders for analytics unit tests.

use crate::analytics::domain::{ReferenceDay, Task, TaskId, TaskKind, TaskNumber, TaskState};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC instant.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// Noon on 2024-03-15 UTC, the default "now" for tests.
pub fn now() -> DateTime<Utc> {
    at(2024, 3, 15, 12, 0)
}

/// UTC reference day for [`now`].
pub fn reference() -> ReferenceDay<Utc> {
    ReferenceDay::utc(now())
}

/// Builds an issue created at [`now`] minus `number` days.
pub fn task(number: u64, state: TaskState) -> Task {
    let created_at = now() - chrono::Duration::days(i64::try_from(number).unwrap_or(0));
    Task::new(
        TaskId::new(format!("PVTI_{number}")),
        TaskNumber::new(number),
        format!("Task {number}"),
        TaskKind::Issue,
        state,
        created_at,
    )
}

/// Builds an open issue.
pub fn open_task(number: u64) -> Task {
    task(number, TaskState::Open)
}

/// Returns the numbers of `tasks` in order.
pub fn numbers<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<u64> {
    tasks.into_iter().map(|task| task.number().value()).collect()
}
