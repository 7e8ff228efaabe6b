//! Database pool initialization.
//!
//! Thin re-export of the `gradecast-db` crate, kept here so application
//! code has a single `crate::config` entry point for every configured
//! resource.

pub use gradecast_db::init_db_pool;
