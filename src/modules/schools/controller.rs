use crate::modules::schools::model::{CreateSchoolDto, PaginatedSchoolsResponse, School};
use crate::modules::schools::service::SchoolService;
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
    path = "/api/schools",
    request_body = CreateSchoolDto,
    responses(
        (status = 200, description = "School created successfully", body = School),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn create_school(
    State(state): State<AppState>,
    Json(dto): Json<CreateSchoolDto>,
) -> Result<Json<School>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let school = SchoolService::create_school(&state.db, dto).await?;
    Ok(Json(school))
}

#[utoipa::path(
    get,
    path = "/api/schools",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of schools", body = PaginatedSchoolsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn get_schools(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedSchoolsResponse>, AppError> {
    let (schools, total) =
        SchoolService::get_schools(&state.db, params.limit(), params.offset()).await?;

    Ok(Json(PaginatedSchoolsResponse {
        data: schools,
        meta: PaginationMeta::new(params.page(), params.limit(), total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}",
    params(
        ("school_id" = Uuid, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = School),
        (status = 404, description = "School not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn get_school(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school_by_id(&state.db, school_id).await?;
    Ok(Json(school))
}
