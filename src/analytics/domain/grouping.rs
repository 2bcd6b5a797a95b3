//! Segregation and grouping of tasks by dimension.

use super::Task;
use indexmap::IndexMap;
use serde::Serialize;

/// Group key used for tasks without a repository.
pub const UNKNOWN_REPOSITORY: &str = "unknown";

/// Group key used for tasks nobody is assigned to.
pub const UNASSIGNED: &str = "unassigned";

/// Group key used for tasks without a workflow status.
pub const NO_STATUS: &str = "no-status";

/// Tasks keyed by a grouping dimension.
///
/// Keys keep first-seen order; tasks within a group keep input order.
pub type TaskGroups<'a> = IndexMap<String, Vec<&'a Task>>;

/// Open and done partitions of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segregated<'a> {
    /// Open tasks.
    pub open: Vec<&'a Task>,
    /// Closed or merged tasks.
    pub closed: Vec<&'a Task>,
}

/// Splits tasks into open and closed partitions.
///
/// Tasks in an unrecognized state are left out of both partitions.
#[must_use]
pub fn segregate_tasks(tasks: &[Task]) -> Segregated<'_> {
    let mut segregated = Segregated::default();
    for task in tasks {
        if task.state().is_open() {
            segregated.open.push(task);
        } else if task.state().is_done() {
            segregated.closed.push(task);
        }
    }
    segregated
}

/// Groups tasks by repository, using [`UNKNOWN_REPOSITORY`] when absent.
#[must_use]
pub fn group_by_repository(tasks: &[Task]) -> TaskGroups<'_> {
    group_by_key(tasks, |task| {
        task.repository().unwrap_or(UNKNOWN_REPOSITORY).to_owned()
    })
}

/// Groups tasks by workflow status, using [`NO_STATUS`] when absent.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> TaskGroups<'_> {
    group_by_key(tasks, |task| task.status().unwrap_or(NO_STATUS).to_owned())
}

/// Groups tasks by assignee.
///
/// A task with several assignees appears once in each assignee's group, so
/// group sizes can sum to more than the task count. Unassigned tasks go to
/// [`UNASSIGNED`].
#[must_use]
pub fn group_by_assignee(tasks: &[Task]) -> TaskGroups<'_> {
    let mut groups = TaskGroups::new();
    for task in tasks {
        if task.is_assigned() {
            for assignee in task.assignees() {
                groups.entry(assignee.clone()).or_default().push(task);
            }
        } else {
            groups.entry(UNASSIGNED.to_owned()).or_default().push(task);
        }
    }
    groups
}

/// Reduces groups to per-key task counts, keeping key order.
#[must_use]
pub fn group_counts(groups: &TaskGroups<'_>) -> IndexMap<String, usize> {
    groups
        .iter()
        .map(|(key, members)| (key.clone(), members.len()))
        .collect()
}

fn group_by_key(tasks: &[Task], key_of: impl Fn(&Task) -> String) -> TaskGroups<'_> {
    let mut groups = TaskGroups::new();
    for task in tasks {
        groups.entry(key_of(task)).or_default().push(task);
    }
    groups
}
