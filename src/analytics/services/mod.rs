//! Application services for task analytics.

mod analytics;
mod snapshot;

pub use analytics::{AnalyticsServiceError, AnalyticsServiceResult, TaskAnalyticsService};
pub use snapshot::AnalyticsSnapshot;
