//! Exam and exam-paper models and DTOs.
//!
//! An exam is a scheduled assessment event; each of its papers covers one
//! subject with a fixed maximum mark.

use chrono::{DateTime, NaiveDate, Utc};
use gradecast_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A scheduled assessment event covering one or more subject papers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exam {
    pub id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    pub starts_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The per-subject component of an exam.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExamPaper {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub subject: String,
    /// Maximum obtainable mark for this paper; always positive.
    pub max_marks: f64,
    pub created_at: DateTime<Utc>,
}

/// An exam together with its papers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExamWithPapers {
    #[serde(flatten)]
    pub exam: Exam,
    pub papers: Vec<ExamPaper>,
}

/// DTO for creating an exam.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateExamDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub starts_on: Option<NaiveDate>,
}

/// DTO for adding a paper to an exam.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateExamPaperDto {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
    #[validate(range(min = 0.01))]
    pub max_marks: f64,
}

/// Paginated response containing exams.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedExamsResponse {
    pub data: Vec<Exam>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_paper_dto_rejects_zero_max() {
        let dto = CreateExamPaperDto {
            subject: "Mathematics".to_string(),
            max_marks: 0.0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_paper_dto_valid() {
        let dto = CreateExamPaperDto {
            subject: "Mathematics".to_string(),
            max_marks: 100.0,
        };
        assert!(dto.validate().is_ok());
    }
}
