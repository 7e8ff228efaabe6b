//! Student result models: the finalized, aggregated outcome of one student
//! in one exam, plus its per-subject breakdown.
//!
//! A [`StudentResult`] is produced by the calculation workflow (one row per
//! student per exam, upserted on recalculation), enriched by the ranking
//! pass (rank columns), and made visible by publication (status and
//! `published_at`). Result rows are never deleted by the workflow, only
//! status-transitioned.

use chrono::{DateTime, Utc};
use gradecast_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Result lifecycle states.
pub mod result_status {
    pub const DRAFT: &str = "draft";
    pub const PUBLISHED: &str = "published";
}

/// The finalized, aggregated outcome for one student in one exam.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentResult {
    pub id: Uuid,
    pub school_id: Uuid,
    pub exam_id: Uuid,
    pub student_id: Uuid,
    /// Class label snapshotted from the student at calculation time
    pub class_name: String,
    /// Section label snapshotted from the student at calculation time
    pub section_name: String,
    /// Sum of obtained marks over sum of maximum marks, as a percentage in
    /// [0, 100]
    pub overall_percentage: f64,
    /// True when every subject passed and the overall percentage meets the
    /// configured overall pass mark
    pub is_passed: bool,
    /// `draft` until published
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Competition rank within the class for this exam; set by the ranking
    /// pass, null before it runs
    pub class_rank: Option<i32>,
    /// Competition rank within the (class, section) group; set by the
    /// ranking pass, null before it runs
    pub section_rank: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-subject line of a student result.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultItem {
    pub id: Uuid,
    pub result_id: Uuid,
    pub exam_paper_id: Uuid,
    pub subject: String,
    pub marks_obtained: f64,
    pub max_marks: f64,
    /// `marks_obtained / max_marks * 100`
    pub percentage: f64,
    /// Letter band derived from the percentage
    pub grade: String,
    /// Percentage met the configured subject pass mark
    pub is_passed: bool,
}

/// A result together with its per-subject items.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResultWithItems {
    #[serde(flatten)]
    pub result: StudentResult,
    pub items: Vec<ResultItem>,
}

/// One approved mark joined with its paper, as consumed by the calculation
/// workflow.
#[derive(Debug, Clone, FromRow)]
pub struct ApprovedMark {
    pub exam_paper_id: Uuid,
    pub subject: String,
    pub marks_obtained: f64,
    pub is_absent: bool,
    pub max_marks: f64,
}

/// DTO for the single-student calculation operation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateResultDto {
    pub student_id: Uuid,
}

/// Outcome of an exam-wide batch calculation.
///
/// Individual student failures are skipped, not raised; the ids list holds
/// only the successfully produced results.
#[derive(Debug, Serialize, ToSchema)]
pub struct BatchCalculationResponse {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub result_ids: Vec<Uuid>,
}

/// Query parameters for listing an exam's results.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ResultQueryParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_name: Option<String>,
    pub section_name: Option<String>,
    /// When true, only `published` results are returned — the gate that
    /// keeps draft results invisible to students and guardians.
    pub published_only: Option<bool>,
}

impl ResultQueryParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Query parameters for the top-performers endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TopPerformersParams {
    /// Maximum entries to return (1-100, default: 10)
    pub limit: Option<i64>,
}

impl TopPerformersParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }
}

/// Paginated response containing results.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResultsResponse {
    pub data: Vec<StudentResult>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_query_params_defaults() {
        let params = ResultQueryParams {
            page: None,
            limit: None,
            class_name: None,
            section_name: None,
            published_only: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_top_performers_limit_clamped() {
        assert_eq!(TopPerformersParams { limit: None }.limit(), 10);
        assert_eq!(TopPerformersParams { limit: Some(0) }.limit(), 1);
        assert_eq!(TopPerformersParams { limit: Some(500) }.limit(), 100);
    }
}
