//! Pure analytics over task snapshots.
//!
//! Everything here is synchronous and side-effect free. Functions borrow a
//! `&[Task]` snapshot and return values that borrow from it; no operation
//! mutates a task or keeps state between calls. The only time input is the
//! [`ReferenceDay`] used for overdue checks.

mod error;
mod grouping;
mod ids;
mod ordering;
mod overdue;
mod priority;
mod query;
mod report;
mod stats;
mod task;

pub use error::{AnalyticsDomainError, ParseTaskKindError};
pub use grouping::{
    NO_STATUS, Segregated, TaskGroups, UNASSIGNED, UNKNOWN_REPOSITORY, group_by_assignee,
    group_by_repository, group_by_status, group_counts, segregate_tasks,
};
pub use ids::{TaskId, TaskNumber};
pub use ordering::{
    DateRange, SortDirection, SortKey, filter_by_date_range, sort_by_creation_date,
    sort_by_due_date, sort_tasks,
};
pub use overdue::{ReferenceDay, is_overdue};
pub use priority::{PriorityBreakdown, PriorityBucket};
pub use query::{PageRequest, QueryPage, SortSpec, TaskFilter, TaskQuery, apply_query};
pub use report::{SummaryReport, summary_report};
pub use stats::{TaskStats, calculate_stats};
pub use task::{Task, TaskKind, TaskState};
