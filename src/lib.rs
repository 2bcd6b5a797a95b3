//! Tasklens: analytics for GitHub project boards.
//!
//! This crate turns a snapshot of issues, pull requests and draft issues into
//! the views a team needs to steer work: overdue tasks, open work missing an
//! ETA or an owner (split by priority), workload per assignee, repository and
//! status, and sorted, filtered, paged task lists.
//!
//! # Architecture
//!
//! Tasklens follows hexagonal architecture principles:
//!
//! - **Domain**: Pure analytics with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task ingestion
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`analytics`]: Task statistics, grouping, ordering and summary reports

pub mod analytics;
