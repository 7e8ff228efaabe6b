//! Result publication models.
//!
//! Publication is the act of making finalized results visible to students
//! and guardians. One publication row exists per (exam, class?, section?)
//! scope; republishing the same scope refreshes the timestamp and flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A record that results for a scope were made visible.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultPublication {
    pub id: Uuid,
    pub school_id: Uuid,
    pub exam_id: Uuid,
    /// Class scope; null means the whole exam
    pub class_name: Option<String>,
    /// Section scope; null means the whole class (or exam)
    pub section_name: Option<String>,
    /// Identity of the staff member who published
    pub published_by: Uuid,
    pub notify_students: bool,
    pub notify_guardians: bool,
    pub published_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// DTO for publishing an exam's results.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PublishResultsDto {
    #[validate(length(min = 1, max = 50))]
    pub class_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub section_name: Option<String>,
    pub published_by: Uuid,
    #[serde(default = "default_true")]
    pub notify_students: bool,
    #[serde(default = "default_true")]
    pub notify_guardians: bool,
}

/// Response for a publish call.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublishResultsResponse {
    pub publication: ResultPublication,
    /// Number of results transitioned (or re-stamped) by this call
    pub published_count: u64,
}
