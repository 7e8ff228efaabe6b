use crate::modules::exams::model::{
    CreateExamDto, CreateExamPaperDto, Exam, ExamPaper, ExamWithPapers, PaginatedExamsResponse,
};
use crate::modules::exams::service::ExamService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use gradecast_core::{PaginationMeta, PaginationParams};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams",
    params(
        ("school_id" = Uuid, Path, description = "School ID")
    ),
    request_body = CreateExamDto,
    responses(
        (status = 200, description = "Exam created successfully", body = Exam),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state, dto))]
pub async fn create_exam(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(dto): Json<CreateExamDto>,
) -> Result<Json<Exam>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let exam = ExamService::create_exam(&state.db, dto, school_id).await?;
    Ok(Json(exam))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "List of exams", body = PaginatedExamsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exams(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedExamsResponse>, AppError> {
    let (exams, total) =
        ExamService::get_exams(&state.db, school_id, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedExamsResponse {
        data: exams,
        meta: PaginationMeta::new(params.page(), params.limit(), total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Exam with its papers", body = ExamWithPapers),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exam(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ExamWithPapers>, AppError> {
    let exam = ExamService::get_exam_with_papers(&state.db, exam_id, school_id).await?;
    Ok(Json(exam))
}

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams/{exam_id}/papers",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    request_body = CreateExamPaperDto,
    responses(
        (status = 200, description = "Paper added successfully", body = ExamPaper),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state, dto))]
pub async fn create_exam_paper(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<CreateExamPaperDto>,
) -> Result<Json<ExamPaper>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let paper = ExamService::create_exam_paper(&state.db, exam_id, school_id, dto).await?;
    Ok(Json(paper))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/papers",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Papers of the exam", body = Vec<ExamPaper>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exam_papers(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<ExamPaper>>, AppError> {
    let papers = ExamService::get_exam_papers(&state.db, exam_id, school_id).await?;
    Ok(Json(papers))
}
