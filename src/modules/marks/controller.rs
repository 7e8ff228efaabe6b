use crate::modules::marks::model::{
    BulkApprovalResponse, Mark, MarkQueryParams, SubmitMarkDto,
};
use crate::modules::marks::service::MarkService;
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
    path = "/api/schools/{school_id}/marks",
    params(
        ("school_id" = Uuid, Path, description = "School ID")
    ),
    request_body = SubmitMarkDto,
    responses(
        (status = 200, description = "Mark submitted", body = Mark),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Exam paper not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Marks"
)]
#[instrument(skip(state, dto))]
pub async fn submit_mark(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(dto): Json<SubmitMarkDto>,
) -> Result<Json<Mark>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let mark = MarkService::submit_mark(&state.db, dto, school_id).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/marks/{mark_id}/approve",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("mark_id" = Uuid, Path, description = "Mark ID")
    ),
    responses(
        (status = 200, description = "Mark approved", body = Mark),
        (status = 400, description = "Mark is not pending", body = ErrorResponse),
        (status = 404, description = "Mark not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn approve_mark(
    State(state): State<AppState>,
    Path((school_id, mark_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Mark>, AppError> {
    let mark = MarkService::approve_mark(&state.db, mark_id, school_id).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/marks/{mark_id}/reject",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("mark_id" = Uuid, Path, description = "Mark ID")
    ),
    responses(
        (status = 200, description = "Mark rejected", body = Mark),
        (status = 400, description = "Mark is not pending", body = ErrorResponse),
        (status = 404, description = "Mark not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn reject_mark(
    State(state): State<AppState>,
    Path((school_id, mark_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Mark>, AppError> {
    let mark = MarkService::reject_mark(&state.db, mark_id, school_id).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    post,
    path = "/api/schools/{school_id}/papers/{paper_id}/marks/approve-all",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("paper_id" = Uuid, Path, description = "Exam paper ID")
    ),
    responses(
        (status = 200, description = "Pending marks approved", body = BulkApprovalResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn approve_paper_marks(
    State(state): State<AppState>,
    Path((school_id, paper_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<BulkApprovalResponse>, AppError> {
    let approved_count = MarkService::approve_paper_marks(&state.db, paper_id, school_id).await?;
    Ok(Json(BulkApprovalResponse { approved_count }))
}

#[utoipa::path(
    get,
    path = "/api/schools/{school_id}/papers/{paper_id}/marks",
    params(
        ("school_id" = Uuid, Path, description = "School ID"),
        ("paper_id" = Uuid, Path, description = "Exam paper ID"),
        MarkQueryParams
    ),
    responses(
        (status = 200, description = "Marks of the paper", body = Vec<Mark>),
        (status = 400, description = "Invalid status filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Marks"
)]
#[instrument(skip(state))]
pub async fn get_paper_marks(
    State(state): State<AppState>,
    Path((school_id, paper_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<MarkQueryParams>,
) -> Result<Json<Vec<Mark>>, AppError> {
    let marks = MarkService::get_paper_marks(
        &state.db,
        paper_id,
        school_id,
        params.status.as_deref(),
    )
    .await?;
    Ok(Json(marks))
}
