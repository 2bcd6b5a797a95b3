//! In-memory adapters for analytics tests and embedding.

mod task_source;

pub use task_source::InMemoryTaskSource;
