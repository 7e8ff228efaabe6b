use crate::modules::analytics::model::{
    AnalyticsQueryParams, DistributionResponse, GenerateAnalyticsDto, ResultAnalytics,
};
use crate::modules::analytics::service::AnalyticsService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams/{exam_id}/analytics",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    request_body = GenerateAnalyticsDto,
    responses(
        (status = 200, description = "Analytics generated", body = ResultAnalytics),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
#[instrument(skip(state))]
pub async fn generate_analytics(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<GenerateAnalyticsDto>,
) -> Result<Json<ResultAnalytics>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let analytics = AnalyticsService::generate_analytics(
        &state.db,
        exam_id,
        school_id,
        dto.class_name.as_deref(),
    )
    .await?;
    Ok(Json(analytics))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/analytics",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        AnalyticsQueryParams
    ),
    responses(
        (status = 200, description = "Stored analytics for the scope", body = ResultAnalytics),
        (status = 404, description = "Analytics not generated yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
#[instrument(skip(state))]
pub async fn get_analytics(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<AnalyticsQueryParams>,
) -> Result<Json<ResultAnalytics>, AppError> {
    let analytics = AnalyticsService::get_analytics(
        &state.db,
        exam_id,
        school_id,
        params.class_name.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Analytics not generated yet")))?;
    Ok(Json(analytics))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/exams/{exam_id}/analytics/distribution",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID"),
        AnalyticsQueryParams
    ),
    responses(
        (status = 200, description = "Pass/fail and grade-band distribution", body = DistributionResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
#[instrument(skip(state))]
pub async fn get_distribution(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<AnalyticsQueryParams>,
) -> Result<Json<DistributionResponse>, AppError> {
    let distribution = AnalyticsService::get_distribution(
        &state.db,
        exam_id,
        school_id,
        params.class_name.as_deref(),
    )
    .await?;
    Ok(Json(distribution))
}
