//! Pass-mark thresholds for the result workflow.
//!
//! The source system never fixed these as constants; they are deployment
//! configuration. A subject passes when its percentage meets
//! `GRADING_SUBJECT_PASS_MARK`; a student passes overall when every subject
//! passed and the overall percentage meets `GRADING_OVERALL_PASS_MARK`.

use std::env;

#[derive(Clone, Copy, Debug)]
pub struct GradingConfig {
    /// Minimum per-subject percentage to pass that subject
    pub subject_pass_mark: f64,
    /// Minimum overall percentage to pass the exam
    pub overall_pass_mark: f64,
}

impl GradingConfig {
    pub fn from_env() -> Self {
        Self {
            subject_pass_mark: env::var("GRADING_SUBJECT_PASS_MARK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(40.0),
            overall_pass_mark: env::var("GRADING_OVERALL_PASS_MARK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(40.0),
        }
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            subject_pass_mark: 40.0,
            overall_pass_mark: 40.0,
        }
    }
}
