//! Priority normalization shared by every priority-split statistic.

use super::Task;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized priority of a task.
///
/// Variant order is the sort order used by priority sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityBucket {
    /// Highest priority.
    P0,
    /// Second priority.
    P1,
    /// Absent or any label other than `P0`/`P1`.
    NoPriority,
}

impl PriorityBucket {
    /// Classifies a raw priority label.
    ///
    /// Only the exact tokens `P0` and `P1` are recognized, ignoring ASCII case.
    /// Everything else, including empty and padded strings, is
    /// [`PriorityBucket::NoPriority`].
    #[must_use]
    pub fn classify(priority: Option<&str>) -> Self {
        match priority {
            Some(label) if label.eq_ignore_ascii_case("p0") => Self::P0,
            Some(label) if label.eq_ignore_ascii_case("p1") => Self::P1,
            _ => Self::NoPriority,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::NoPriority => "no-priority",
        }
    }
}

impl fmt::Display for PriorityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tasks split into the three priority buckets.
///
/// The three lists partition the input: every task lands in exactly one, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBreakdown<'a> {
    /// Number of P0 tasks.
    pub p0: usize,
    /// Number of P1 tasks.
    pub p1: usize,
    /// Number of tasks without a recognized priority.
    pub no_priority: usize,
    /// P0 tasks.
    pub p0_list: Vec<&'a Task>,
    /// P1 tasks.
    pub p1_list: Vec<&'a Task>,
    /// Tasks without a recognized priority.
    pub no_priority_list: Vec<&'a Task>,
}

impl<'a> PriorityBreakdown<'a> {
    /// Splits tasks by [`Task::priority_bucket`].
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut breakdown = Self::default();
        for task in tasks {
            match task.priority_bucket() {
                PriorityBucket::P0 => breakdown.p0_list.push(task),
                PriorityBucket::P1 => breakdown.p1_list.push(task),
                PriorityBucket::NoPriority => breakdown.no_priority_list.push(task),
            }
        }
        breakdown.p0 = breakdown.p0_list.len();
        breakdown.p1 = breakdown.p1_list.len();
        breakdown.no_priority = breakdown.no_priority_list.len();
        breakdown
    }

    /// Returns the combined size of all three buckets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.p0 + self.p1 + self.no_priority
    }

    /// Returns the tasks in one bucket.
    #[must_use]
    pub fn bucket(&self, bucket: PriorityBucket) -> &[&'a Task] {
        match bucket {
            PriorityBucket::P0 => &self.p0_list,
            PriorityBucket::P1 => &self.p1_list,
            PriorityBucket::NoPriority => &self.no_priority_list,
        }
    }
}
