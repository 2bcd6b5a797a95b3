//! Owned task snapshot pinned to a reference day.

use crate::analytics::domain::{
    QueryPage, ReferenceDay, SummaryReport, Task, TaskQuery, TaskStats, apply_query,
    calculate_stats, summary_report,
};
use chrono::TimeZone;

/// Task collection captured at one instant together with its reference day.
///
/// Every derived view borrows from the snapshot, so repeated calls see the
/// same data even if the source has since been refreshed.
#[derive(Debug, Clone)]
pub struct AnalyticsSnapshot<Tz: TimeZone> {
    tasks: Vec<Task>,
    reference: ReferenceDay<Tz>,
}

impl<Tz: TimeZone> AnalyticsSnapshot<Tz> {
    /// Pins `tasks` to `reference`.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, reference: ReferenceDay<Tz>) -> Self {
        Self { tasks, reference }
    }

    /// Returns the captured tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the reference day used for overdue checks.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceDay<Tz> {
        &self.reference
    }

    /// Computes aggregate statistics.
    #[must_use]
    pub fn stats(&self) -> TaskStats<'_> {
        calculate_stats(&self.tasks, &self.reference)
    }

    /// Builds the summary report.
    #[must_use]
    pub fn summary_report(&self) -> SummaryReport<'_> {
        summary_report(&self.tasks, &self.reference)
    }

    /// Runs a presentation query.
    #[must_use]
    pub fn query(&self, query: &TaskQuery) -> QueryPage<'_> {
        apply_query(&self.tasks, query, &self.reference)
    }
}
