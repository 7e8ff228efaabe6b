use utoipa::OpenApi;

use crate::utils::errors::ErrorResponse;
use gradecast_core::grading::{Grade, GradeDistribution, PassStats};
use gradecast_core::pagination::PaginationMeta;
use gradecast_models::analytics::{DistributionResponse, GenerateAnalyticsDto, ResultAnalytics};
use gradecast_models::exams::{
    CreateExamDto, CreateExamPaperDto, Exam, ExamPaper, ExamWithPapers, PaginatedExamsResponse,
};
use gradecast_models::marks::{BulkApprovalResponse, Mark, SubmitMarkDto};
use gradecast_models::publications::{
    PublishResultsDto, PublishResultsResponse, ResultPublication,
};
use gradecast_models::rankings::{CalculateRankingsDto, CalculateRankingsResponse};
use gradecast_models::results::{
    BatchCalculationResponse, CalculateResultDto, PaginatedResultsResponse, ResultItem,
    StudentResult, StudentResultWithItems,
};
use gradecast_models::schools::{CreateSchoolDto, PaginatedSchoolsResponse, School};
use gradecast_models::students::{CreateStudentDto, PaginatedStudentsResponse, Student};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::schools::controller::create_school,
        crate::modules::schools::controller::get_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::exams::controller::create_exam,
        crate::modules::exams::controller::get_exams,
        crate::modules::exams::controller::get_exam,
        crate::modules::exams::controller::create_exam_paper,
        crate::modules::exams::controller::get_exam_papers,
        crate::modules::marks::controller::submit_mark,
        crate::modules::marks::controller::approve_mark,
        crate::modules::marks::controller::reject_mark,
        crate::modules::marks::controller::approve_paper_marks,
        crate::modules::marks::controller::get_paper_marks,
        crate::modules::results::controller::calculate_result,
        crate::modules::results::controller::calculate_exam_results,
        crate::modules::results::controller::get_results,
        crate::modules::results::controller::get_top_performers,
        crate::modules::results::controller::get_result,
        crate::modules::results::controller::get_subject_performance,
        crate::modules::rankings::controller::calculate_rankings,
        crate::modules::publications::controller::publish_results,
        crate::modules::analytics::controller::generate_analytics,
        crate::modules::analytics::controller::get_analytics,
        crate::modules::analytics::controller::get_distribution,
    ),
    components(
        schemas(
            School,
            CreateSchoolDto,
            PaginatedSchoolsResponse,
            Student,
            CreateStudentDto,
            PaginatedStudentsResponse,
            Exam,
            CreateExamDto,
            ExamPaper,
            CreateExamPaperDto,
            ExamWithPapers,
            PaginatedExamsResponse,
            Mark,
            SubmitMarkDto,
            BulkApprovalResponse,
            StudentResult,
            ResultItem,
            StudentResultWithItems,
            CalculateResultDto,
            BatchCalculationResponse,
            PaginatedResultsResponse,
            CalculateRankingsDto,
            CalculateRankingsResponse,
            PublishResultsDto,
            PublishResultsResponse,
            ResultPublication,
            GenerateAnalyticsDto,
            ResultAnalytics,
            DistributionResponse,
            Grade,
            GradeDistribution,
            PassStats,
            PaginationMeta,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Schools", description = "Tenant (school) management"),
        (name = "Students", description = "Student roster management"),
        (name = "Exams", description = "Exam and paper administration"),
        (name = "Marks", description = "Marks entry and approval"),
        (name = "Results", description = "Result calculation and queries"),
        (name = "Rankings", description = "Competition ranking passes"),
        (name = "Publications", description = "Making results visible"),
        (name = "Analytics", description = "Exam-wide statistics"),
    ),
    info(
        title = "Gradecast API",
        description = "Multi-tenant exam results service: marks approval, result calculation, rankings, publication, and analytics",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
