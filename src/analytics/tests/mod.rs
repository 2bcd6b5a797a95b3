//! Unit tests for task analytics.

mod fixtures;
