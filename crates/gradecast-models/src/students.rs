//! Student roster models and DTOs.
//!
//! Students carry their class and section as plain labels; results calculated
//! for a student snapshot those labels at calculation time.

use chrono::{DateTime, Utc};
use gradecast_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A student enrolled in a school.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub school_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Class label, e.g. "Grade 8"
    pub class_name: String,
    /// Section label within the class, e.g. "A"
    pub section_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for enrolling a student.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50))]
    pub class_name: String,
    #[validate(length(min = 1, max = 20))]
    pub section_name: String,
}

/// Query parameters for filtering and paginating students.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentQueryParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_name: Option<String>,
    pub section_name: Option<String>,
}

impl StudentQueryParams {
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

/// Paginated response containing students.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedStudentsResponse {
    pub data: Vec<Student>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_dto_valid() {
        let dto = CreateStudentDto {
            first_name: "Amina".to_string(),
            last_name: "Bello".to_string(),
            class_name: "Grade 8".to_string(),
            section_name: "A".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_empty_class() {
        let dto = CreateStudentDto {
            first_name: "Amina".to_string(),
            last_name: "Bello".to_string(),
            class_name: "".to_string(),
            section_name: "A".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_query_params_defaults() {
        let params = StudentQueryParams {
            page: None,
            limit: None,
            class_name: None,
            section_name: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_query_params_clamping() {
        let params = StudentQueryParams {
            page: Some(0),
            limit: Some(1000),
            class_name: None,
            section_name: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);
    }
}
