//! # Gradecast Models
//!
//! Domain models and DTOs for the Gradecast API.
//!
//! This crate provides the data structures shared between the service layer,
//! the HTTP controllers, and the integration tests: database entities,
//! request/response DTOs, and their validation rules.
//!
//! # Modules
//!
//! - [`schools`]: tenant (school) models
//! - [`students`]: student roster models
//! - [`exams`]: exam and exam-paper models
//! - [`marks`]: marks entry and approval models
//! - [`results`]: student result and result item models
//! - [`rankings`]: ranking pass models
//! - [`publications`]: result publication models
//! - [`analytics`]: exam analytics models

pub mod analytics;
pub mod exams;
pub mod marks;
pub mod publications;
pub mod rankings;
pub mod results;
pub mod schools;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use schools::{CreateSchoolDto, PaginatedSchoolsResponse, School};

pub use students::{CreateStudentDto, PaginatedStudentsResponse, Student, StudentQueryParams};

pub use exams::{
    CreateExamDto, CreateExamPaperDto, Exam, ExamPaper, ExamWithPapers, PaginatedExamsResponse,
};

pub use marks::{BulkApprovalResponse, Mark, MarkQueryParams, SubmitMarkDto, mark_status};

pub use results::{
    ApprovedMark, BatchCalculationResponse, CalculateResultDto, PaginatedResultsResponse,
    ResultItem, ResultQueryParams, StudentResult, StudentResultWithItems, TopPerformersParams,
    result_status,
};

pub use rankings::{CalculateRankingsDto, CalculateRankingsResponse};

pub use publications::{PublishResultsDto, PublishResultsResponse, ResultPublication};

pub use analytics::{
    AnalyticsQueryParams, DistributionResponse, GenerateAnalyticsDto, ResultAnalytics,
};
