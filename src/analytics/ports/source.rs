//! Source port supplying task snapshots to the analytics service.

use crate::analytics::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Supplier of task snapshots, typically backed by a GitHub project sync.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns the current task collection in a stable order.
    ///
    /// Each call returns an independent copy; callers may hold it while the
    /// source is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the snapshot cannot be produced.
    async fn snapshot(&self) -> TaskSourceResult<Vec<Task>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The upstream system could not be reached.
    #[error("task source unavailable: {0}")]
    Unavailable(String),

    /// The upstream payload could not be decoded into tasks.
    #[error("malformed task payload: {0}")]
    Malformed(String),

    /// Adapter-level failure.
    #[error("task source error: {0}")]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps an adapter error.
    pub fn source_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Arc::new(err))
    }
}
