//! Aggregate statistics over a task snapshot.

use super::{PriorityBreakdown, ReferenceDay, Task};
use chrono::TimeZone;
use serde::Serialize;

/// Derived statistics for one task snapshot.
///
/// Borrowed from the input slice and recomputed on every call; nothing here
/// outlives the snapshot it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats<'a> {
    /// Number of tasks in the snapshot.
    pub total: usize,
    /// Number of open tasks.
    pub open: usize,
    /// Number of closed or merged tasks.
    pub closed: usize,
    /// Number of overdue tasks.
    pub overdue: usize,
    /// Overdue tasks in input order.
    pub overdue_list: Vec<&'a Task>,
    /// Number of open tasks without a due date.
    #[serde(rename = "noTechHandoffETA")]
    pub no_tech_handoff_eta: usize,
    /// Open tasks without a due date, in input order.
    #[serde(rename = "noTechHandoffETAList")]
    pub no_tech_handoff_eta_list: Vec<&'a Task>,
    /// Open tasks without a due date, split by priority.
    #[serde(rename = "noTechHandoffETAByPriority")]
    pub no_tech_handoff_eta_by_priority: PriorityBreakdown<'a>,
    /// Number of open tasks nobody is assigned to.
    pub unassigned: usize,
    /// Open unassigned tasks in input order.
    pub unassigned_list: Vec<&'a Task>,
    /// Open unassigned tasks, split by priority.
    pub unassigned_by_priority: PriorityBreakdown<'a>,
}

/// Computes [`TaskStats`] for `tasks` as of `reference`.
///
/// Tasks in [`super::TaskState::Unrecognized`] count towards `total` only.
#[must_use]
pub fn calculate_stats<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    reference: &ReferenceDay<Tz>,
) -> TaskStats<'a> {
    let open = tasks.iter().filter(|task| task.state().is_open()).count();
    let closed = tasks.iter().filter(|task| task.state().is_done()).count();

    let overdue_list: Vec<&Task> = tasks
        .iter()
        .filter(|task| reference.is_overdue(task))
        .collect();

    let no_tech_handoff_eta_list: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.state().is_open() && task.due_date().is_none())
        .collect();
    let no_tech_handoff_eta_by_priority =
        PriorityBreakdown::from_tasks(no_tech_handoff_eta_list.iter().copied());

    let unassigned_list: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.state().is_open() && !task.is_assigned())
        .collect();
    let unassigned_by_priority = PriorityBreakdown::from_tasks(unassigned_list.iter().copied());

    TaskStats {
        total: tasks.len(),
        open,
        closed,
        overdue: overdue_list.len(),
        overdue_list,
        no_tech_handoff_eta: no_tech_handoff_eta_list.len(),
        no_tech_handoff_eta_list,
        no_tech_handoff_eta_by_priority,
        unassigned: unassigned_list.len(),
        unassigned_list,
        unassigned_by_priority,
    }
}
