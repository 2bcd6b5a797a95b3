//! Sorting and date-range filtering of task sequences.

use super::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Field a task sequence can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Creation timestamp.
    CreatedAt,
    /// Last-updated timestamp.
    UpdatedAt,
    /// Due date; tasks without one sort last.
    DueDate,
    /// Project-board addition time; tasks without one sort last.
    AddedToProjectAt,
    /// Issue or pull request number.
    Number,
    /// Title, compared case-insensitively.
    Title,
    /// Priority bucket, P0 first when ascending.
    Priority,
}

impl SortKey {
    /// Returns the direction a presentation layer should default to.
    #[must_use]
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::CreatedAt | Self::UpdatedAt | Self::AddedToProjectAt => {
                SortDirection::Descending
            }
            Self::DueDate | Self::Number | Self::Title | Self::Priority => {
                SortDirection::Ascending
            }
        }
    }

    /// Compares two tasks on this key in the given direction.
    ///
    /// Missing optional values compare greater than present ones whatever the
    /// direction, so they always end up last.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task, direction: SortDirection) -> Ordering {
        match self {
            Self::CreatedAt => direction.apply(left.created_at().cmp(&right.created_at())),
            Self::UpdatedAt => direction.apply(left.updated_at().cmp(&right.updated_at())),
            Self::DueDate => compare_optional(left.due_date(), right.due_date(), direction),
            Self::AddedToProjectAt => compare_optional(
                left.added_to_project_at(),
                right.added_to_project_at(),
                direction,
            ),
            Self::Number => direction.apply(left.number().cmp(&right.number())),
            Self::Title => direction.apply(compare_titles(left.title(), right.title())),
            Self::Priority => {
                direction.apply(left.priority_bucket().cmp(&right.priority_bucket()))
            }
        }
    }
}

fn compare_optional<T: Ord>(left: Option<T>, right: Option<T>, direction: SortDirection) -> Ordering {
    match (left, right) {
        (Some(left_value), Some(right_value)) => direction.apply(left_value.cmp(&right_value)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_titles(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Stable sort of `tasks` by `key`.
///
/// Tasks that compare equal keep their input order.
#[must_use]
pub fn sort_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by(|left, right| key.compare(left, right, direction));
    sorted
}

/// Sorts by creation time. Newest-first is [`SortDirection::Descending`].
#[must_use]
pub fn sort_by_creation_date<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    direction: SortDirection,
) -> Vec<&'a Task> {
    sort_tasks(tasks, SortKey::CreatedAt, direction)
}

/// Sorts by due date; undated tasks always follow dated ones.
#[must_use]
pub fn sort_by_due_date<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    direction: SortDirection,
) -> Vec<&'a Task> {
    sort_tasks(tasks, SortKey::DueDate, direction)
}

/// Inclusive creation-date window. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest accepted instant.
    pub start: Option<DateTime<Utc>>,
    /// Latest accepted instant.
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Returns `true` when neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns whether `instant` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| instant >= start)
            && self.end.is_none_or(|end| instant <= end)
    }
}

/// Keeps tasks whose `created_at` falls inside `range`.
#[must_use]
pub fn filter_by_date_range<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    range: &DateRange,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|task| range.contains(task.created_at()))
        .collect()
}
