use crate::modules::results::controller::{
    calculate_exam_results, calculate_result, get_result, get_results, get_subject_performance,
    get_top_performers,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_results_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_results))
        .route("/calculate", post(calculate_result))
        .route("/calculate-all", post(calculate_exam_results))
        .route("/top", get(get_top_performers))
        .route("/{student_id}", get(get_result))
        .route("/{student_id}/subjects", get(get_subject_performance))
}
