//! Configuration modules for the Gradecast API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible defaults.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`grading`]: pass-mark thresholds for the result workflow

pub mod cors;
pub mod database;
pub mod grading;
