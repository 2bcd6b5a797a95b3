//! Service layer loading snapshots and producing summaries.

use super::AnalyticsSnapshot;
use crate::analytics::{
    domain::ReferenceDay,
    ports::{TaskSource, TaskSourceError},
};
use chrono::TimeZone;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsServiceError {
    /// The task source failed.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
    /// The report could not be encoded.
    #[error("failed to serialize summary report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for analytics service operations.
pub type AnalyticsServiceResult<T> = Result<T, AnalyticsServiceError>;

/// Analytics orchestration service.
///
/// "Now" comes from the injected clock and day boundaries from the injected
/// zone, so overdue results are reproducible in tests.
#[derive(Clone)]
pub struct TaskAnalyticsService<S, C, Tz>
where
    S: TaskSource,
    C: Clock + Send + Sync,
    Tz: TimeZone + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    zone: Tz,
}

impl<S, C, Tz> TaskAnalyticsService<S, C, Tz>
where
    S: TaskSource,
    C: Clock + Send + Sync,
    Tz: TimeZone + Send + Sync,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(source: Arc<S>, clock: Arc<C>, zone: Tz) -> Self {
        Self {
            source,
            clock,
            zone,
        }
    }

    /// Loads the current tasks and pins them to today's reference day.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsServiceError::Source`] when the source fails.
    pub async fn load_snapshot(&self) -> AnalyticsServiceResult<AnalyticsSnapshot<Tz>> {
        let tasks = self
            .source
            .snapshot()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "task source snapshot failed"))?;
        let reference = ReferenceDay::new(self.clock.utc(), self.zone.clone());
        tracing::debug!(
            task_count = tasks.len(),
            today = %reference.today(),
            "loaded task snapshot"
        );
        Ok(AnalyticsSnapshot::new(tasks, reference))
    }

    /// Builds the summary report for the current snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsServiceError`] when the source fails or the report
    /// cannot be encoded.
    pub async fn summary_json(&self) -> AnalyticsServiceResult<serde_json::Value> {
        let snapshot = self.load_snapshot().await?;
        let report = snapshot.summary_report();
        tracing::debug!(
            total = report.stats.total,
            overdue = report.stats.overdue,
            repositories = report.by_repository.len(),
            assignees = report.by_assignee.len(),
            "built summary report"
        );
        Ok(serde_json::to_value(&report)?)
    }
}
