//! Port definitions for task analytics.

mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
