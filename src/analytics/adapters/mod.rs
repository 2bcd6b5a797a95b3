//! Adapter implementations for the task source port.

pub mod memory;
