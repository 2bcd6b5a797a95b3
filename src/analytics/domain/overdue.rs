//! Calendar-day overdue classification.

use super::Task;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// "Today" as a calendar day in an explicit reference timezone.
///
/// Overdue checks compare calendar days, never instants: a task due at
/// 23:59 today is already overdue at 00:00 today. Both the due date and "now"
/// are projected into the same zone before the time of day is dropped.
#[derive(Debug, Clone)]
pub struct ReferenceDay<Tz: TimeZone> {
    today: NaiveDate,
    zone: Tz,
}

impl<Tz: TimeZone> ReferenceDay<Tz> {
    /// Builds the reference day for `now` as seen from `zone`.
    #[must_use]
    pub fn new(now: DateTime<Utc>, zone: Tz) -> Self {
        let today = now.with_timezone(&zone).date_naive();
        Self { today, zone }
    }

    /// Returns today's calendar day.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the reference timezone.
    #[must_use]
    pub const fn zone(&self) -> &Tz {
        &self.zone
    }

    /// Projects an instant onto a calendar day in the reference zone.
    #[must_use]
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }

    /// Returns whether `task` is overdue on this day.
    ///
    /// Only open tasks with a due date can be overdue.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        if !task.state().is_open() {
            return false;
        }
        task.due_date()
            .is_some_and(|due| self.day_of(due) <= self.today)
    }
}

impl ReferenceDay<Utc> {
    /// Builds a UTC reference day.
    #[must_use]
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc)
    }
}

impl ReferenceDay<Local> {
    /// Builds the reference day from a clock, in the host's local zone.
    #[must_use]
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::new(clock.utc(), Local)
    }
}

/// Returns whether `task` is overdue relative to `reference`.
#[must_use]
pub fn is_overdue<Tz: TimeZone>(task: &Task, reference: &ReferenceDay<Tz>) -> bool {
    reference.is_overdue(task)
}
