use crate::modules::students::model::{
    CreateStudentDto, PaginatedStudentsResponse, Student, StudentQueryParams,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use gradecast_core::PaginationMeta;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/students",
    params(
        ("school_id" = Uuid, Path, description = "School ID")
    ),
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student enrolled successfully", body = Student),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<Json<Student>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let student = StudentService::create_student(&state.db, dto, school_id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/students",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        StudentQueryParams
    ),
    responses(
        (status = 200, description = "List of students", body = PaginatedStudentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Query(params): Query<StudentQueryParams>,
) -> Result<Json<PaginatedStudentsResponse>, AppError> {
    let (students, total) = StudentService::get_students_by_school(
        &state.db,
        school_id,
        params.class_name.as_deref(),
        params.section_name.as_deref(),
        params.limit(),
        params.offset(),
    )
    .await?;

    Ok(Json(PaginatedStudentsResponse {
        data: students,
        meta: PaginationMeta::new(params.page(), params.limit(), total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/students/{student_id}",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path((school_id, student_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, student_id, school_id).await?;
    Ok(Json(student))
}
