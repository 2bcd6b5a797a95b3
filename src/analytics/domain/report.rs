//! Summary report combining statistics with per-dimension counts.

use super::{
    ReferenceDay, Task, TaskStats, calculate_stats, group_by_assignee, group_by_repository,
    group_by_status, group_counts,
};
use chrono::TimeZone;
use indexmap::IndexMap;
use serde::Serialize;

/// Statistics plus group sizes for repository, assignee and status.
///
/// Group membership lists are dropped at this level; only counts remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport<'a> {
    /// Aggregate statistics.
    pub stats: TaskStats<'a>,
    /// Task count per repository.
    pub by_repository: IndexMap<String, usize>,
    /// Task count per assignee; multi-assignee tasks count once per assignee.
    pub by_assignee: IndexMap<String, usize>,
    /// Task count per workflow status.
    pub by_status: IndexMap<String, usize>,
}

/// Builds the summary report for `tasks` as of `reference`.
#[must_use]
pub fn summary_report<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    reference: &ReferenceDay<Tz>,
) -> SummaryReport<'a> {
    let stats = calculate_stats(tasks, reference);
    tracing::trace!(
        total = stats.total,
        open = stats.open,
        overdue = stats.overdue,
        missing_eta = stats.no_tech_handoff_eta,
        "computed task summary"
    );

    SummaryReport {
        stats,
        by_repository: group_counts(&group_by_repository(tasks)),
        by_assignee: group_counts(&group_by_assignee(tasks)),
        by_status: group_counts(&group_by_status(tasks)),
    }
}
