//! Marks entry and approval models.
//!
//! A mark is one student's score on one exam paper. Marks start out
//! `pending`; only `approved` marks feed the result calculation workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Mark review states.
pub mod mark_status {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, PENDING | APPROVED | REJECTED)
    }
}

/// One student's score on one exam paper.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mark {
    pub id: Uuid,
    pub school_id: Uuid,
    pub exam_paper_id: Uuid,
    pub student_id: Uuid,
    pub marks_obtained: f64,
    /// An absent student scores zero; the paper still counts toward the
    /// overall denominator.
    pub is_absent: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for submitting (or resubmitting) a mark.
///
/// Resubmission overwrites the existing mark for the same (paper, student)
/// pair and resets its status to `pending`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitMarkDto {
    pub exam_paper_id: Uuid,
    pub student_id: Uuid,
    #[validate(range(min = 0.0))]
    pub marks_obtained: f64,
    #[serde(default)]
    pub is_absent: bool,
}

/// Query parameters for listing a paper's marks.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MarkQueryParams {
    /// Filter by review status (`pending`, `approved`, `rejected`)
    pub status: Option<String>,
}

/// Response for bulk approval of a paper's pending marks.
#[derive(Debug, Serialize, ToSchema)]
pub struct BulkApprovalResponse {
    pub approved_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_mark_dto_rejects_negative() {
        let dto = SubmitMarkDto {
            exam_paper_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            marks_obtained: -1.0,
            is_absent: false,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_submit_mark_dto_zero_is_valid() {
        let dto = SubmitMarkDto {
            exam_paper_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            marks_obtained: 0.0,
            is_absent: true,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_mark_status_validity() {
        assert!(mark_status::is_valid("pending"));
        assert!(mark_status::is_valid("approved"));
        assert!(mark_status::is_valid("rejected"));
        assert!(!mark_status::is_valid("draft"));
    }
}
