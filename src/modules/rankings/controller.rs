use crate::modules::rankings::model::{CalculateRankingsDto, CalculateRankingsResponse};
use crate::modules::rankings::service::RankingService;
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
    path = "/api/schools/{school_id}/exams/{exam_id}/rankings",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("exam_id" = Uuid, Path, description = "Exam ID")
    ),
    request_body = CalculateRankingsDto,
    responses(
        (status = 200, description = "Ranking pass completed", body = CalculateRankingsResponse),
        (status = 404, description = "Exam not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rankings"
)]
#[instrument(skip(state))]
pub async fn calculate_rankings(
    State(state): State<AppState>,
    Path((school_id, exam_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<CalculateRankingsDto>,
) -> Result<Json<CalculateRankingsResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let ranked_count = RankingService::calculate_rankings(
        &state.db,
        exam_id,
        school_id,
        dto.class_name.as_deref(),
        dto.section_name.as_deref(),
    )
    .await?;

    Ok(Json(CalculateRankingsResponse { ranked_count }))
}
