use crate::modules::publications::model::{PublishResultsDto, PublishResultsResponse};
use crate::modules::publications::service::PublicationService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/exams/{exam_id}/publish",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    request_body = PublishResultsDto,
    responses(
        (status = 200, description = "Results published", body = PublishResultsResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Publications"
)]
#[instrument(skip(state, dto))]
pub async fn publish_results(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<PublishResultsDto>,
) -> Result<Json<PublishResultsResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let response =
        PublicationService::publish_results(&state.db, exam_id, school_id, dto).await?;
    Ok(Json(response))
}
