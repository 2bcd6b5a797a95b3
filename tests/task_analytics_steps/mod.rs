//! Step definitions for task analytics behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
