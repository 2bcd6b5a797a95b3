//! Task analytics for project boards.
//!
//! Turns a flat snapshot of issues, pull requests and draft issues into
//! overdue lists, priority-split gap reports, workload groupings and sorted or
//! filtered views. The module follows hexagonal architecture:
//!
//! - Pure analytics in [`domain`]
//! - The task source contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Snapshot orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
