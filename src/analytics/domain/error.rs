//! Error types for analytics domain parsing and query validation.

use thiserror::Error;

/// Errors returned while constructing analytics query values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyticsDomainError {
    /// Page numbers are 1-based.
    #[error("invalid page number {0}, expected a positive integer")]
    InvalidPageNumber(usize),

    /// A page must hold at least one task.
    #[error("invalid page size {0}, expected a positive integer")]
    InvalidPageSize(usize),
}

/// Error returned while parsing a task kind from external data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task kind: {0}")]
pub struct ParseTaskKindError(pub String);
