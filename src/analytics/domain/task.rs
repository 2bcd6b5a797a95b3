//! Task record and the lifecycle enums the engine classifies on.

use super::{ParseTaskKindError, PriorityBucket, TaskId, TaskNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of project item a task was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    /// Repository issue.
    Issue,
    /// Pull request.
    PullRequest,
    /// Project-only draft issue.
    DraftIssue,
}

impl TaskKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "ISSUE",
            Self::PullRequest => "PULL_REQUEST",
            Self::DraftIssue => "DRAFT_ISSUE",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "ISSUE" => Ok(Self::Issue),
            "PULL_REQUEST" | "PULLREQUEST" => Ok(Self::PullRequest),
            "DRAFT_ISSUE" | "DRAFTISSUE" => Ok(Self::DraftIssue),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upstream lifecycle state of a task.
///
/// `Closed` and `Merged` are terminal. Any state string the engine does not
/// know deserializes to [`TaskState::Unrecognized`]; such tasks are counted in
/// totals but belong to neither the open nor the closed bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum TaskState {
    /// Work is still active.
    Open,
    /// Closed without merge.
    Closed,
    /// Pull request merged.
    Merged,
    /// State value outside the known set.
    Unrecognized,
}

impl TaskState {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Merged => "MERGED",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Returns `true` for the only active state.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` for terminal states.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Closed | Self::Merged)
    }
}

impl From<&str> for TaskState {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Self::Open,
            "CLOSED" => Self::Closed,
            "MERGED" => Self::Merged,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for TaskState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked issue, pull request or draft issue.
///
/// Ingestion owns every field; analytics code only reads tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    number: TaskNumber,
    #[serde(rename = "type")]
    kind: TaskKind,
    state: TaskState,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    assignees: Vec<String>,
    #[serde(default)]
    priority: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    added_to_project_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with the required fields.
    ///
    /// `updated_at` starts equal to `created_at`; optional fields start empty.
    #[must_use]
    pub fn new(
        id: TaskId,
        number: TaskNumber,
        title: impl Into<String>,
        kind: TaskKind,
        state: TaskState,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            number,
            kind,
            state,
            status: None,
            repository: None,
            assignees: Vec::new(),
            priority: None,
            created_at,
            updated_at: created_at,
            due_date: None,
            added_to_project_at: None,
        }
    }

    /// Sets the workflow status column.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the owning repository.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Sets assignees, keeping their order.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = String>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Sets the raw priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the last-updated timestamp.
    #[must_use]
    pub const fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Sets the target completion date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets when the task was added to the project board.
    #[must_use]
    pub const fn with_added_to_project_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_to_project_at = Some(added_at);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the human-facing number.
    #[must_use]
    pub const fn number(&self) -> TaskNumber {
        self.number
    }

    /// Returns the item kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the workflow status column, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the owning repository, if any.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Returns assignees in ingestion order.
    #[must_use]
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Returns `true` when at least one assignee is set.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.assignees.is_empty()
    }

    /// Returns the raw priority label, if any.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Returns the normalized priority bucket.
    #[must_use]
    pub fn priority_bucket(&self) -> PriorityBucket {
        PriorityBucket::classify(self.priority())
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-updated timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the target completion date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns when the task joined the project board, if known.
    #[must_use]
    pub const fn added_to_project_at(&self) -> Option<DateTime<Utc>> {
        self.added_to_project_at
    }
}
