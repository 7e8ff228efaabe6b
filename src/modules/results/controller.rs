use crate::modules::results::model::{
    BatchCalculationResponse, CalculateResultDto, PaginatedResultsResponse, ResultItem,
    ResultQueryParams, StudentResult, StudentResultWithItems, TopPerformersParams,
};
use crate::modules::results::service::ResultService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use gradecast_core::PaginationMeta;
use tracing::instrument;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams/{exam_id}/results/calculate",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    request_body = CalculateResultDto,
    responses(
        (status = 200, description = "Result calculated", body = StudentResultWithItems),
        (status = 404, description = "Student or exam not found", body = ErrorResponse),
        (status = 422, description = "Student has no approved marks", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn calculate_result(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<CalculateResultDto>,
) -> Result<Json<StudentResultWithItems>, AppError> {
    let result = ResultService::calculate_student_result(
        &state.db,
        exam_id,
        dto.student_id,
        school_id,
        &state.grading,
    )
    .await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams/{exam_id}/results/calculate-all",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Batch calculation outcome", body = BatchCalculationResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn calculate_exam_results(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<BatchCalculationResponse>, AppError> {
    let outcome =
        ResultService::calculate_exam_results(&state.db, exam_id, school_id, &state.grading)
            .await?;
    Ok(Json(outcome))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/results",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        ResultQueryParams
    ),
    responses(
        (status = 200, description = "Results in scope", body = PaginatedResultsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<ResultQueryParams>,
) -> Result<Json<PaginatedResultsResponse>, AppError> {
    let (results, total) = ResultService::get_results(
        &state.db,
        exam_id,
        school_id,
        params.class_name.as_deref(),
        params.section_name.as_deref(),
        params.published_only.unwrap_or(false),
        params.limit(),
        params.offset(),
    )
    .await?;

    Ok(Json(PaginatedResultsResponse {
        data: results,
        meta: PaginationMeta::new(params.page(), params.limit(), total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/results/top",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        TopPerformersParams
    ),
    responses(
        (status = 200, description = "Top performers among passed students", body = Vec<StudentResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_top_performers(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<TopPerformersParams>,
) -> Result<Json<Vec<StudentResult>>, AppError> {
    let results =
        ResultService::get_top_performers(&state.db, exam_id, school_id, params.limit()).await?;
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/results/{student_id}",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Result with items", body = StudentResultWithItems),
        (status = 404, description = "Result not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_result(
    State(state): State<AppState>,
    Path((school_id, exam_id, student_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<StudentResultWithItems>, AppError> {
    let result = ResultService::get_result(&state.db, exam_id, student_id, school_id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/results/{student_id}/subjects",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Subject-wise performance", body = Vec<ResultItem>),
        (status = 404, description = "Result not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_subject_performance(
    State(state): State<AppState>,
    Path((school_id, exam_id, student_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<Vec<ResultItem>>, AppError> {
    let items =
        ResultService::get_subject_performance(&state.db, exam_id, student_id, school_id).await?;
    Ok(Json(items))
}
