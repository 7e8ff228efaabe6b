//! Analytics model re-exports from the shared models crate.

pub use gradecast_models::analytics::*;
