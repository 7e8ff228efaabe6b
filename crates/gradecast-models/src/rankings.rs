//! Ranking pass models.
//!
//! The ranking pass orders an exam's results by overall percentage and
//! writes competition ranks back onto the result rows: class ranks within
//! each class group, section ranks within each (class, section) group.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for triggering a ranking pass.
///
/// Both fields are optional scope filters: omit both to rank the whole
/// exam, give a class to rank one class, give class and section to rank a
/// single section.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct CalculateRankingsDto {
    #[validate(length(min = 1, max = 50))]
    pub class_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub section_name: Option<String>,
}

/// Outcome of a ranking pass.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculateRankingsResponse {
    /// Number of result rows whose ranks were written
    pub ranked_count: usize,
}
