//! # Gradecast Core
//!
//! Pure domain logic for the Gradecast API.
//!
//! This crate holds the arithmetic the rest of the workspace builds on:
//!
//! - [`grading`]: percentages, letter grades, competition ranking,
//!   grade-band distributions, and pass/fail statistics
//! - [`pagination`]: pagination parameters and response metadata
//!
//! Nothing in this crate performs I/O; every function is deterministic and
//! unit-tested in isolation.

pub mod grading;
pub mod pagination;

// Re-export commonly used types at crate root
pub use grading::{Grade, GradeDistribution, PassStats, competition_ranks, percentage};
pub use pagination::{PaginationMeta, PaginationParams};
