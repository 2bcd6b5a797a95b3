//! Caller-owned filter, sort and page selections.
//!
//! Presentation layers keep a [`TaskQuery`] as their own state and pass it in
//! on every call; the engine never remembers a previous selection.

use super::{
    AnalyticsDomainError, DateRange, NO_STATUS, PriorityBucket, ReferenceDay, SortDirection,
    SortKey, Task, TaskKind, TaskState, UNASSIGNED, UNKNOWN_REPOSITORY, sort_tasks,
};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};

/// Conjunctive task filter. Unset criteria match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFilter {
    /// Accepted states; empty accepts all.
    pub states: Vec<TaskState>,
    /// Accepted kinds; empty accepts all.
    pub kinds: Vec<TaskKind>,
    /// Repository group key, `"unknown"` selecting tasks without one.
    pub repository: Option<String>,
    /// Assignee group key, `"unassigned"` selecting tasks without assignees.
    pub assignee: Option<String>,
    /// Status group key, `"no-status"` selecting tasks without one.
    pub status: Option<String>,
    /// Required priority bucket.
    pub priority: Option<PriorityBucket>,
    /// Creation-date window.
    pub created: DateRange,
    /// Keep only overdue tasks.
    pub overdue_only: bool,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Restricts to the given states.
    #[must_use]
    pub fn with_states(mut self, states: impl IntoIterator<Item = TaskState>) -> Self {
        self.states = states.into_iter().collect();
        self
    }

    /// Restricts to the given kinds.
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = TaskKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Restricts to one repository group.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Restricts to one assignee group.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Restricts to one status group.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts to one priority bucket.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityBucket) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts creation dates to `range`.
    #[must_use]
    pub const fn with_created(mut self, range: DateRange) -> Self {
        self.created = range;
        self
    }

    /// Keeps only overdue tasks.
    #[must_use]
    pub const fn overdue_only(mut self) -> Self {
        self.overdue_only = true;
        self
    }

    /// Requires the title to contain `needle`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    /// Returns whether `task` satisfies every set criterion.
    #[must_use]
    pub fn matches<Tz: TimeZone>(&self, task: &Task, reference: &ReferenceDay<Tz>) -> bool {
        (self.states.is_empty() || self.states.contains(&task.state()))
            && (self.kinds.is_empty() || self.kinds.contains(&task.kind()))
            && self.repository.as_deref().is_none_or(|wanted| {
                task.repository().unwrap_or(UNKNOWN_REPOSITORY) == wanted
            })
            && self
                .assignee
                .as_deref()
                .is_none_or(|wanted| matches_assignee(task, wanted))
            && self
                .status
                .as_deref()
                .is_none_or(|wanted| task.status().unwrap_or(NO_STATUS) == wanted)
            && self
                .priority
                .is_none_or(|wanted| task.priority_bucket() == wanted)
            && self.created.contains(task.created_at())
            && (!self.overdue_only || reference.is_overdue(task))
            && self
                .search
                .as_deref()
                .is_none_or(|needle| title_contains(task.title(), needle))
    }
}

fn matches_assignee(task: &Task, wanted: &str) -> bool {
    if task.is_assigned() {
        task.assignees().iter().any(|assignee| assignee == wanted)
    } else {
        wanted == UNASSIGNED
    }
}

fn title_contains(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by.
    pub key: SortKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sorts by `key` in its default direction.
    #[must_use]
    pub const fn by(key: SortKey) -> Self {
        Self {
            key,
            direction: key.default_direction(),
        }
    }

    /// Overrides the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::by(SortKey::CreatedAt)
    }
}

/// Validated 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    number: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPageRequest {
    number: usize,
    size: usize,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = AnalyticsDomainError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.number, raw.size)
    }
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsDomainError::InvalidPageNumber`] for page zero and
    /// [`AnalyticsDomainError::InvalidPageSize`] for an empty page size.
    pub const fn new(number: usize, size: usize) -> Result<Self, AnalyticsDomainError> {
        if number == 0 {
            return Err(AnalyticsDomainError::InvalidPageNumber(number));
        }
        if size == 0 {
            return Err(AnalyticsDomainError::InvalidPageSize(size));
        }
        Ok(Self { number, size })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn number(self) -> usize {
        self.number
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Returns the number of matches skipped before this page.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }
}

/// Full presentation selection: filter, sort and optional page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskQuery {
    /// Filter criteria.
    pub filter: TaskFilter,
    /// Sort order.
    pub sort: SortSpec,
    /// Page selection; `None` returns every match.
    pub page: Option<PageRequest>,
}

impl TaskQuery {
    /// Replaces the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Selects a page.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<'a> {
    /// Tasks on this page, sorted.
    pub items: Vec<&'a Task>,
    /// Number of tasks matching the filter across all pages.
    pub total_matched: usize,
    /// Number of pages; zero when nothing matched.
    pub page_count: usize,
    /// Page that was requested, if any.
    pub page: Option<PageRequest>,
}

/// Filters, sorts and pages `tasks` according to `query`.
#[must_use]
pub fn apply_query<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    query: &TaskQuery,
    reference: &ReferenceDay<Tz>,
) -> QueryPage<'a> {
    let matched = sort_tasks(
        tasks
            .iter()
            .filter(|task| query.filter.matches(task, reference)),
        query.sort.key,
        query.sort.direction,
    );
    let total_matched = matched.len();

    match query.page {
        Some(page) => QueryPage {
            items: matched
                .into_iter()
                .skip(page.offset())
                .take(page.size())
                .collect(),
            total_matched,
            page_count: total_matched.div_ceil(page.size()),
            page: Some(page),
        },
        None => QueryPage {
            items: matched,
            total_matched,
            page_count: usize::from(total_matched > 0),
            page: None,
        },
    }
}
