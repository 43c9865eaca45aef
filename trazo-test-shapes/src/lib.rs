//! Shared shape fixtures and geometric checks for trazo's integration tests
//! and benchmarks.

pub mod fixtures;
pub mod geometry;

pub use fixtures::*;
pub use geometry::*;
