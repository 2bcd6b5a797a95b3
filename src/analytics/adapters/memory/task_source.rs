//! In-memory task source holding a replaceable snapshot.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::analytics::{
    domain::Task,
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
///
/// Clones share the same snapshot, so an ingestion task can refresh it while
/// the analytics service reads from another clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source seeded with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Creates a source from a JSON array of task records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Malformed`] when the payload is not a task
    /// array.
    pub fn from_json(payload: &str) -> TaskSourceResult<Self> {
        let tasks: Vec<Task> = serde_json::from_str(payload)
            .map_err(|err| TaskSourceError::Malformed(err.to_string()))?;
        Ok(Self::with_tasks(tasks))
    }

    /// Replaces the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Source`] when the lock is poisoned.
    pub fn replace(&self, tasks: Vec<Task>) -> TaskSourceResult<()> {
        let mut guard = self.tasks.write().map_err(|err| {
            TaskSourceError::source_error(std::io::Error::other(err.to_string()))
        })?;
        *guard = tasks;
        Ok(())
    }

    /// Appends one task to the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Source`] when the lock is poisoned.
    pub fn push(&self, task: Task) -> TaskSourceResult<()> {
        let mut guard = self.tasks.write().map_err(|err| {
            TaskSourceError::source_error(std::io::Error::other(err.to_string()))
        })?;
        guard.push(task);
        Ok(())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn snapshot(&self) -> TaskSourceResult<Vec<Task>> {
        let guard = self.tasks.read().map_err(|err| {
            TaskSourceError::source_error(std::io::Error::other(err.to_string()))
        })?;
        Ok(guard.clone())
    }
}
